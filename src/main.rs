#[tokio::main]
async fn main() {
    stock_scanner::utils::init_tracing();
    stock_scanner::cli::run().await;
}
