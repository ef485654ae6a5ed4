//! Error types for PageFetch

use thiserror::Error;

/// Errors that can occur during fetch operations
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL is missing
    #[error("Missing required parameter: url")]
    MissingUrl,

    /// Failed to build HTTP client
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Request timed out
    #[error("Request timed out: server did not respond within 10 seconds")]
    Timeout,

    /// Failed to connect to server (DNS, TCP, or TLS)
    #[error("Failed to connect to server: {0}")]
    Connect(#[source] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    /// Other request error
    #[error("Request failed: {0}")]
    Request(String),
}

impl FetchError {
    /// Classify a reqwest error into a fetch error
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Connect(err)
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FetchError::MissingUrl.to_string(),
            "Missing required parameter: url"
        );
        assert_eq!(
            FetchError::Timeout.to_string(),
            "Request timed out: server did not respond within 10 seconds"
        );
        assert_eq!(
            FetchError::Status(reqwest::StatusCode::NOT_FOUND).to_string(),
            "HTTP 404 Not Found"
        );
        assert_eq!(
            FetchError::Request("boom".to_string()).to_string(),
            "Request failed: boom"
        );
    }
}
