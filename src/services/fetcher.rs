use crate::config::AppConfig;
use crate::error::{AppError, BoxError, Result};
use crate::models::Vertical;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// HTTP GET returning the response body as text.
///
/// Implementations must fail on non-2xx status. Errors must not echo the
/// query string, which carries the credential.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_text(&self, url: &str, query: &[(&'static str, String)]) -> std::result::Result<String, BoxError>;
}

/// reqwest-backed transport. No timeout beyond the client default.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get_text(&self, url: &str, query: &[(&'static str, String)]) -> std::result::Result<String, BoxError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| e.without_url())?;

        let status = response.status();
        debug!(%status, "Upstream responded");

        let response = response.error_for_status().map_err(|e| e.without_url())?;
        let body = response.text().await.map_err(|e| e.without_url())?;
        Ok(body)
    }
}

/// Fetches raw CSV exports for a vertical
#[derive(Clone)]
pub struct Fetcher {
    transport: Arc<dyn Transport>,
    config: Arc<AppConfig>,
}

impl Fetcher {
    pub fn new(transport: Arc<dyn Transport>, config: Arc<AppConfig>) -> Self {
        Self { transport, config }
    }

    /// Fetcher backed by a fresh reqwest client
    pub fn from_config(config: Arc<AppConfig>) -> Self {
        Self::new(Arc::new(ReqwestTransport::new()), config)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// GET the export for `ticker`.
    ///
    /// An empty credential fails before any request is made.
    #[instrument(skip(self, credential))]
    pub async fn fetch(&self, vertical: Vertical, ticker: &str, credential: &str) -> Result<String> {
        if credential.trim().is_empty() {
            warn!("Upstream credential missing, request not sent");
            return Err(AppError::Config(format!(
                "{} not configured",
                crate::constants::API_TOKEN_ENV
            )));
        }

        let url = vertical.endpoint(&self.config);
        let params = vertical.query_params(ticker, credential);
        debug!(url, "Requesting export");

        let body = self
            .transport
            .get_text(url, &params)
            .await
            .map_err(|e| {
                warn!(error = %e, "Upstream request failed");
                AppError::upstream(vertical.label(), e)
            })?;

        info!(bytes = body.len(), "Fetched export");
        Ok(body)
    }
}
