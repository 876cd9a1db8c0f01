//! Main error type for the Vertex AI client.

use std::time::Duration;
use thiserror::Error;
use super::categories::*;

/// Result type alias for Vertex AI operations.
pub type VertexResult<T> = Result<T, VertexError>;

/// Top-level error type for the Vertex AI integration.
#[derive(Error, Debug, Clone)]
pub enum VertexError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    #[error("Rate limit error: {0}")]
    RateLimit(#[from] RateLimitError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    #[error("Response error: {0}")]
    Response(#[from] ResponseError),
}

impl VertexError {
    /// Builds a client-side validation error with the given message.
    pub fn client_validation(message: impl Into<String>) -> Self {
        VertexError::Request(RequestError::ClientValidation {
            message: message.into(),
        })
    }

    /// Returns true if this error was raised locally while validating input.
    pub fn is_client_validation(&self) -> bool {
        matches!(self, VertexError::Request(RequestError::ClientValidation { .. }))
    }

    /// Returns true if this error was caused by the caller-side timeout firing.
    pub fn is_timeout(&self) -> bool {
        matches!(self, VertexError::Network(NetworkError::Timeout { .. }))
    }

    /// Returns true if this error is retryable.
    ///
    /// This layer never retries on its own; the hint is for callers.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            VertexError::RateLimit(_)
                | VertexError::Network(NetworkError::Timeout { .. })
                | VertexError::Network(NetworkError::ConnectionFailed { .. })
                | VertexError::Server(ServerError::ServiceUnavailable { .. })
        )
    }

    /// Returns the retry-after duration if available.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            VertexError::RateLimit(e) => e.retry_after(),
            VertexError::Server(ServerError::ServiceUnavailable { retry_after }) => *retry_after,
            _ => None,
        }
    }
}

impl From<serde_json::Error> for VertexError {
    fn from(err: serde_json::Error) -> Self {
        VertexError::Response(ResponseError::DeserializationError {
            message: err.to_string(),
        })
    }
}

impl From<url::ParseError> for VertexError {
    fn from(err: url::ParseError) -> Self {
        VertexError::Configuration(ConfigurationError::InvalidEndpoint {
            url: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_validation_kind() {
        let err = VertexError::client_validation("bad input");
        assert!(err.is_client_validation());
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "Request error: bad input");
    }

    #[test]
    fn test_error_is_retryable() {
        let rate_limit = VertexError::RateLimit(RateLimitError::TooManyRequests {
            retry_after: Some(Duration::from_secs(30)),
        });
        assert!(rate_limit.is_retryable());

        let timeout = VertexError::Network(NetworkError::Timeout {
            duration: Duration::from_millis(5),
        });
        assert!(timeout.is_retryable());
        assert!(timeout.is_timeout());

        let auth_error = VertexError::Authentication(AuthenticationError::InvalidToken);
        assert!(!auth_error.is_retryable());
    }

    #[test]
    fn test_retry_after() {
        let unavailable = VertexError::Server(ServerError::ServiceUnavailable {
            retry_after: Some(Duration::from_secs(60)),
        });
        assert_eq!(unavailable.retry_after(), Some(Duration::from_secs(60)));

        let config_error = VertexError::Configuration(ConfigurationError::MissingProject);
        assert_eq!(config_error.retry_after(), None);
    }
}
