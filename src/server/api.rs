use crate::constants::{API_DESCRIPTION, API_TITLE, API_VERSION};
use crate::error::AppError;
use crate::models::{FilingRecord, NewsRecord};
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Response body for `GET /sec-filings/{ticker}`
#[derive(Debug, Serialize)]
pub struct FilingsResponse {
    pub ticker: String,
    pub filings: Vec<FilingRecord>,
}

/// Response body for `GET /news/{ticker}`
#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub ticker: String,
    pub news: Vec<NewsRecord>,
}

/// Response body for `GET /`
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<&'static str>,
}

/// GET / - Service information
pub async fn root_handler() -> impl IntoResponse {
    Json(ServiceInfo {
        name: API_TITLE,
        description: API_DESCRIPTION,
        version: API_VERSION,
        endpoints: vec!["/sec-filings/{ticker}", "/news/{ticker}"],
    })
}

/// GET /sec-filings/{ticker} - SEC filings, oldest first
///
/// The ticker is passed upstream as given; any pipeline failure is a 500.
#[instrument(skip(app_state))]
pub async fn sec_filings_handler(
    State(app_state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<FilingsResponse>, AppError> {
    debug!("Received request for SEC filings");

    let result = app_state.pipeline.filings(&ticker).await?;

    info!(filings = result.len(), "Returning SEC filings");
    Ok(Json(FilingsResponse {
        ticker: result.ticker,
        filings: result.records,
    }))
}

/// GET /news/{ticker} - News, newest first
#[instrument(skip(app_state))]
pub async fn news_handler(
    State(app_state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<NewsResponse>, AppError> {
    debug!("Received request for news");

    let result = app_state.pipeline.news(&ticker).await?;

    info!(news = result.len(), "Returning news");
    Ok(Json(NewsResponse {
        ticker: result.ticker,
        news: result.records,
    }))
}
