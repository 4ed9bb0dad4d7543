//! Resolution client error types

use thiserror::Error;

/// Errors that can occur during entity resolution operations
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// Connection to the resolution service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the resolution service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the resolution service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Credentials are missing or were rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Request timed out
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The configured timeout in seconds
        timeout_secs: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ResolutionError {
    /// Whether this error is a transport-level failure (as opposed to a
    /// client-side configuration or parsing problem)
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::ServiceUnavailable(_)
                | Self::RateLimitExceeded
                | Self::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_classification() {
        assert!(ResolutionError::ConnectionFailed("x".to_string()).is_transport());
        assert!(ResolutionError::RateLimitExceeded.is_transport());
        assert!(ResolutionError::Timeout { timeout_secs: 10 }.is_transport());
        assert!(!ResolutionError::Configuration("x".to_string()).is_transport());
        assert!(!ResolutionError::ParseError("x".to_string()).is_transport());
    }

    #[test]
    fn timeout_display_names_the_limit() {
        let err = ResolutionError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));
    }
}
