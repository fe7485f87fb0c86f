//! Error types for the Poloniex client library.

use serde::Deserialize;
use thiserror::Error;

/// The main error type for all Poloniex client operations.
///
/// Errors raised before any network I/O are [`PoloniexError::MissingCredentials`]
/// and [`PoloniexError::Validation`]. Transport failures are surfaced unchanged
/// and never retried.
#[derive(Error, Debug)]
pub enum PoloniexError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Request parameters could not be form-encoded
    #[error("Parameter encoding failed: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// A caller-supplied argument is outside its allow-list
    #[error("Invalid argument: {0}")]
    Validation(String),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Invalid response from the API (e.g. a body that is not JSON)
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for private endpoints")]
    MissingCredentials,
}

impl PoloniexError {
    /// Shorthand for building a [`PoloniexError::Validation`].
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error was raised before any request left the client.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::MissingCredentials | Self::Encode(_) | Self::Auth(_)
        )
    }
}

/// An error payload returned by the exchange.
///
/// The client never converts these into [`PoloniexError`]: the JSON body is
/// handed back as-is. Use [`ApiError::from_response`] to recognise it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The message from the `error` field.
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    /// Create a new API error from its message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extract the exchange error from a response body shaped like
    /// `{"error": "..."}`. Returns `None` for any other shape.
    pub fn from_response(value: &serde_json::Value) -> Option<Self> {
        ErrorBody::deserialize(value)
            .ok()
            .map(|body| Self::new(body.error))
    }

    /// Check if this is an invalid nonce error.
    pub fn is_invalid_nonce(&self) -> bool {
        self.message.contains("Nonce must be greater than")
    }

    /// Check if this is an invalid key or signature error.
    pub fn is_invalid_key(&self) -> bool {
        self.message.contains("Invalid API key")
    }

    /// Check if the account lacks funds for the request.
    pub fn is_insufficient_funds(&self) -> bool {
        self.message.contains("Not enough")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_response() {
        let body = serde_json::json!({
            "error": "Nonce must be greater than 1500000000000000. You provided 1."
        });
        let error = ApiError::from_response(&body).unwrap();
        assert!(error.is_invalid_nonce());
        assert!(!error.is_invalid_key());
    }

    #[test]
    fn test_api_error_ignores_success_shapes() {
        let body = serde_json::json!({ "BTC": "0.5", "ETH": "1.0" });
        assert!(ApiError::from_response(&body).is_none());

        let body = serde_json::json!([{ "orderNumber": "1" }]);
        assert!(ApiError::from_response(&body).is_none());
    }

    #[test]
    fn test_local_errors() {
        assert!(PoloniexError::MissingCredentials.is_local());
        assert!(PoloniexError::validation("bad period").is_local());
        assert!(!PoloniexError::InvalidResponse("html".into()).is_local());
    }

    #[test]
    fn test_validation_display() {
        let error = PoloniexError::validation("Invalid candle period: 123");
        assert_eq!(error.to_string(), "Invalid argument: Invalid candle period: 123");
    }
}
