pub mod api;

use crate::config::AppConfig;
use crate::services::Pipeline;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Pipeline,
}

impl AppState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }
}

/// Build the router with all routes
pub fn router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(api::root_handler))
        .route("/sec-filings/{ticker}", get(api::sec_filings_handler))
        .route("/news/{ticker}", get(api::news_handler))
        .layer(cors)
        .with_state(app_state)
}

/// Start the axum server
pub async fn serve(config: &AppConfig, app_state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting stock scanner server");

    if config.api_token.is_none() {
        tracing::warn!(
            "{} is not set; every request will fail until it is configured",
            crate::constants::API_TOKEN_ENV
        );
    }

    tracing::info!("Registering routes:");
    tracing::info!("  GET /");
    tracing::info!("  GET /sec-filings/{{ticker}}");
    tracing::info!("  GET /news/{{ticker}}");

    let app = router(app_state);

    let addr: SocketAddr = config.socket_addr();
    tracing::info!(%addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
