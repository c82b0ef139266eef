use crate::constants::{API_TOKEN_ENV, DEFAULT_NEWS_URL, DEFAULT_SEC_FILINGS_URL};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::{debug, warn};

const DEFAULT_PORT: u16 = 8000;

/// Process-wide, read-only configuration.
///
/// A missing credential fails only the requests that need it, never startup.
#[derive(Clone)]
pub struct AppConfig {
    pub api_token: Option<String>,
    pub sec_filings_url: String,
    pub news_url: String,
    pub host: IpAddr,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            sec_filings_url: DEFAULT_SEC_FILINGS_URL.to_string(),
            news_url: DEFAULT_NEWS_URL.to_string(),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, reading `.env` first if present
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
                warn!(value = %raw, error = %e, "Invalid HOST, using default");
                defaults.host
            }),
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
                warn!(value = %raw, error = %e, "Invalid PORT, using default");
                defaults.port
            }),
            None => defaults.port,
        };

        Self {
            api_token: lookup(API_TOKEN_ENV).filter(|token| !token.trim().is_empty()),
            sec_filings_url: lookup("FINVIZ_SEC_FILINGS_URL").unwrap_or(defaults.sec_filings_url),
            news_url: lookup("FINVIZ_NEWS_URL").unwrap_or(defaults.news_url),
            host,
            port,
        }
    }

    /// Credential as passed to the fetcher; empty when not configured
    pub fn credential(&self) -> &str {
        self.api_token.as_deref().unwrap_or("")
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_token", &self.api_token.as_ref().map(|_| "***"))
            .field("sec_filings_url", &self.sec_filings_url)
            .field("news_url", &self.news_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = AppConfig::from_lookup(|_| None);
        assert!(config.api_token.is_none());
        assert_eq!(config.credential(), "");
        assert_eq!(config.sec_filings_url, DEFAULT_SEC_FILINGS_URL);
        assert_eq!(config.news_url, DEFAULT_NEWS_URL);
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_reads_token_and_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("FINVIZ_API_TOKEN", "secret"),
            ("FINVIZ_NEWS_URL", "http://localhost:9000/news"),
            ("PORT", "9876"),
            ("HOST", "127.0.0.1"),
        ]));
        assert_eq!(config.credential(), "secret");
        assert_eq!(config.news_url, "http://localhost:9000/news");
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9876");
    }

    #[test]
    fn test_blank_token_is_treated_as_missing() {
        let config = AppConfig::from_lookup(lookup_from(&[("FINVIZ_API_TOKEN", "   ")]));
        assert!(config.api_token.is_none());
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = AppConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")]));
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_debug_masks_token() {
        let config = AppConfig::from_lookup(lookup_from(&[("FINVIZ_API_TOKEN", "secret")]));
        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret"));
    }
}
