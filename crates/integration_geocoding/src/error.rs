//! Geocoding error types

use thiserror::Error;

/// Errors that can occur while talking to a geocoding provider
///
/// Inside the resolution cascade every variant is treated as "no
/// result from this provider" and the next query variant or stage is
/// tried; `should_fallback` classifies which failures are transient,
/// for logging and for callers using the provider clients directly.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Connection to the geocoding service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the geocoding service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a response from the geocoding service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Query is empty or otherwise unusable
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// API key or access token is missing or rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Provider rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl GeocodeError {
    /// Returns true if the next provider in a cascade should be tried
    #[must_use]
    pub const fn should_fallback(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::ParseError(_)
                | Self::RateLimitExceeded
                | Self::Timeout { .. }
        )
    }
}
