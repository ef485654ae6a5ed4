//! HTTP client for PageFetch

use crate::error::FetchError;
use crate::DEFAULT_USER_AGENT;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;
use tracing::debug;

/// Total request timeout (connect + read)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetch options that can be configured via the tool builder
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Custom User-Agent
    pub user_agent: Option<String>,
    /// Custom total timeout
    pub timeout: Option<Duration>,
}

/// Fetch a URL and return the decoded body
pub async fn fetch(url: &str) -> Result<String, FetchError> {
    fetch_with_options(url, FetchOptions::default()).await
}

/// Fetch a URL with custom options
///
/// Issues a single GET request. Redirects follow the client default policy;
/// TLS and certificate failures surface as errors. Any non-2xx status is a
/// failure.
pub async fn fetch_with_options(url: &str, options: FetchOptions) -> Result<String, FetchError> {
    // Build headers
    let mut headers = HeaderMap::new();
    let user_agent = options.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
    );

    // Build client
    let client = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(options.timeout.unwrap_or(REQUEST_TIMEOUT))
        .build()
        .map_err(FetchError::ClientBuild)?;

    debug!(url, "fetching");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(FetchError::from_reqwest)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let body = response.bytes().await.map_err(FetchError::from_reqwest)?;

    Ok(decode_body(&body))
}

/// Decode a response body as UTF-8, falling back to Latin-1.
///
/// UTF-8 is tried first so valid UTF-8 is never mis-read as Latin-1. The
/// Latin-1 fallback maps every byte to the code point of the same value and
/// cannot fail.
fn decode_body(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_body_utf8() {
        assert_eq!(decode_body("héllo".as_bytes()), "héllo");
        assert_eq!(decode_body(b"plain ascii"), "plain ascii");
    }

    #[test]
    fn test_decode_body_latin1_fallback() {
        // 0xE9 is 'é' in Latin-1 but not valid UTF-8 on its own
        assert_eq!(decode_body(&[b'c', b'a', b'f', 0xE9]), "caf\u{e9}");
    }

    #[test]
    fn test_decode_body_latin1_never_fails() {
        let all_bytes: Vec<u8> = (0..=255).collect();
        let decoded = decode_body(&all_bytes);
        assert_eq!(decoded.chars().count(), 256);
    }
}
