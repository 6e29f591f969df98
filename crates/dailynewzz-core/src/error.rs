//! Error types for DailyNewzz core.

use thiserror::Error;

/// Failures talking to the headlines endpoint.
///
/// None of these are shown to users; the controller maps them all to one
/// fixed reply and logs the detail.
#[derive(Debug, Error)]
pub enum NewsError {
    /// The request did not complete in time.
    #[error("request timed out")]
    Timeout,

    /// Connection, TLS or other transport failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success HTTP status.
    #[error("upstream returned HTTP {0}")]
    Status(u16),

    /// The body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for NewsError {
    fn from(e: reqwest::Error) -> Self {
        // The request URL carries the API key in its query string.
        let e = e.without_url();
        if e.is_timeout() {
            NewsError::Timeout
        } else if e.is_decode() {
            NewsError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            NewsError::Status(status.as_u16())
        } else {
            NewsError::Transport(e.to_string())
        }
    }
}

/// Invalid or missing startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("{0} not set. Add it to the environment or an .env file.")]
    Missing(&'static str),

    /// A variable is set but cannot be used.
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Result type for news operations.
pub type Result<T> = std::result::Result<T, NewsError>;
