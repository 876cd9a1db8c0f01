//! Transport layer error types.

use crate::error::{NetworkError, VertexError};

/// Transport error.
///
/// Caller-side deadlines are applied above the transport, so a transport never
/// reports a request timeout. A failed or timed-out connect is `Connection`.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Request error: {0}")]
    Request(String),
}

impl From<TransportError> for VertexError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Connection(message) => {
                VertexError::Network(NetworkError::ConnectionFailed { message })
            }
            TransportError::Request(message) => {
                VertexError::Network(NetworkError::RequestFailed { message })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_is_not_a_timeout() {
        let err = VertexError::from(TransportError::Connection("connect timed out".into()));
        assert!(matches!(err, VertexError::Network(NetworkError::ConnectionFailed { .. })));
        assert!(!err.is_timeout());
        assert!(err.is_retryable());
    }

    #[test]
    fn test_request_error_maps_to_request_failed() {
        let err = VertexError::from(TransportError::Request("stream reset".into()));
        assert!(matches!(err, VertexError::Network(NetworkError::RequestFailed { .. })));
        assert!(!err.is_timeout());
    }
}
