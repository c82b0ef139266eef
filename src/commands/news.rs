use crate::commands::pipeline_from_env;
use crate::models::Vertical;
use crate::services::Pipeline;
use crate::terminal::TerminalPresenter;
use std::io::{self, Write};
use tracing::warn;

/// Fetch news for `ticker` and render it. Returns false when the pipeline failed.
pub async fn present<W: Write>(
    pipeline: &Pipeline,
    ticker: &str,
    presenter: &mut TerminalPresenter<W>,
) -> io::Result<bool> {
    match pipeline.news_digest(ticker).await {
        Ok(digest) => {
            presenter.news(&digest)?;
            Ok(true)
        }
        Err(e) => {
            warn!(ticker, error = %e, "News lookup failed");
            presenter.error(Vertical::News, ticker, &e)?;
            Ok(false)
        }
    }
}

pub async fn run(ticker: String) {
    let pipeline = pipeline_from_env();
    let mut presenter = TerminalPresenter::stdout();
    let ticker = ticker.trim().to_uppercase();

    match present(&pipeline, &ticker, &mut presenter).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}
