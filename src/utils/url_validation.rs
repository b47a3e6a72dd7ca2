//! Endpoint URL validation
//!
//! Validates the operator-configured vendor base URLs at startup so that a
//! typo'd scheme or hostless URL fails fast instead of surfacing as an opaque
//! connect error on the first call. Only schemes and host presence are
//! checked; these URLs come from the server operator, not from request
//! payloads.

use thiserror::Error;
use url::Url;

/// Errors that can occur during base URL validation
#[derive(Debug, Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),

    #[error("URL scheme must be one of {expected}, got: {got}")]
    UnexpectedScheme { expected: &'static str, got: String },

    #[error("URL must have a host")]
    MissingHost,
}

/// Validate a REST API base URL (http or https).
pub fn validate_http_base(base: &str) -> Result<Url, UrlValidationError> {
    validate_base(base, &["http", "https"], "http/https")
}

/// Validate a WebSocket base URL (ws or wss).
pub fn validate_ws_base(base: &str) -> Result<Url, UrlValidationError> {
    validate_base(base, &["ws", "wss"], "ws/wss")
}

fn validate_base(
    base: &str,
    schemes: &[&str],
    expected: &'static str,
) -> Result<Url, UrlValidationError> {
    let url = Url::parse(base)?;

    if !schemes.contains(&url.scheme()) {
        return Err(UrlValidationError::UnexpectedScheme {
            expected,
            got: url.scheme().to_string(),
        });
    }

    if url.host_str().is_none() {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url)
}
