use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error as ThisError;

/// Boxed cause carried by upstream failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Fatal pipeline errors. Each one aborts the current request only.
#[derive(ThisError, Debug)]
pub enum AppError {
    #[error("{0}")]
    Config(String),

    #[error("Failed to fetch {what}: {source}")]
    UpstreamFetch {
        what: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("Error processing {what}: {message}")]
    Decode {
        what: &'static str,
        message: String,
    },
}

impl AppError {
    pub fn upstream(what: &'static str, source: impl Into<BoxError>) -> Self {
        AppError::UpstreamFetch {
            what,
            source: source.into(),
        }
    }

    pub fn decode(what: &'static str, message: impl Into<String>) -> Self {
        AppError::Decode {
            what,
            message: message.into(),
        }
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::decode("CSV data", err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

// Alias for convenience
pub type Error = AppError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_includes_cause() {
        let err = AppError::upstream("news", "502 Bad Gateway");
        assert_eq!(err.to_string(), "Failed to fetch news: 502 Bad Gateway");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_decode_message() {
        let err = AppError::decode("SEC filings", "bad row");
        assert_eq!(err.to_string(), "Error processing SEC filings: bad row");
    }

    #[test]
    fn test_into_response_is_500() {
        let response = AppError::Config("FINVIZ_API_TOKEN not configured".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
