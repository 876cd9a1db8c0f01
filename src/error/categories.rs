//! Error category types for granular error handling.

use std::time::Duration;
use thiserror::Error;

/// Configuration-related errors.
#[derive(Error, Debug, Clone)]
pub enum ConfigurationError {
    #[error("Missing Google Cloud project")]
    MissingProject,

    #[error("Invalid endpoint URL: {url}")]
    InvalidEndpoint { url: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

/// Authentication-related errors reported by the service.
#[derive(Error, Debug, Clone)]
pub enum AuthenticationError {
    #[error("Invalid or expired access token")]
    InvalidToken,

    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },
}

/// Request errors.
///
/// `ClientValidation` is raised locally, before any network call, and is
/// never retryable.
#[derive(Error, Debug, Clone)]
pub enum RequestError {
    #[error("{message}")]
    ClientValidation { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String, details: Vec<ValidationDetail> },
}

/// Validation detail for field-level errors.
#[derive(Debug, Clone)]
pub struct ValidationDetail {
    pub field: String,
    pub description: String,
}

/// Rate limiting errors.
#[derive(Error, Debug, Clone)]
pub enum RateLimitError {
    #[error("Too many requests")]
    TooManyRequests { retry_after: Option<Duration> },

    #[error("Quota exceeded")]
    QuotaExceeded { retry_after: Option<Duration> },
}

impl RateLimitError {
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            RateLimitError::TooManyRequests { retry_after }
            | RateLimitError::QuotaExceeded { retry_after } => *retry_after,
        }
    }
}

/// Network-related errors.
#[derive(Error, Debug, Clone)]
pub enum NetworkError {
    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("Request timed out after {duration:?}")]
    Timeout { duration: Duration },

    #[error("Request failed: {message}")]
    RequestFailed { message: String },
}

/// Server-side errors.
#[derive(Error, Debug, Clone)]
pub enum ServerError {
    #[error("Internal server error: {message}")]
    InternalError { message: String },

    #[error("Service unavailable")]
    ServiceUnavailable { retry_after: Option<Duration> },
}

/// Response handling errors.
#[derive(Error, Debug, Clone)]
pub enum ResponseError {
    #[error("Failed to deserialize response: {message}")]
    DeserializationError { message: String },

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Resource not found: {message}")]
    NotFound { message: String },
}
