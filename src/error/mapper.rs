//! Error mapping utilities for HTTP status codes and API responses.

use serde::Deserialize;
use super::categories::*;
use super::types::VertexError;

/// Structured API error response from Vertex AI.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Detailed error information from API.
#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: i32,
    pub message: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub details: Vec<serde_json::Value>,
}

/// Maps an HTTP status code and response body to a `VertexError`.
///
/// The body is parsed as a Google API error envelope when possible; otherwise
/// the raw body text becomes the message.
pub fn map_http_status_with_body(status: u16, body: &[u8]) -> VertexError {
    let (message, error_details) = match serde_json::from_slice::<ApiErrorResponse>(body) {
        Ok(error_response) => (error_response.error.message.clone(), Some(error_response.error)),
        Err(_) => (String::from_utf8_lossy(body).to_string(), None),
    };

    match status {
        400 => {
            let details = error_details
                .as_ref()
                .map(|e| parse_validation_details(&e.details))
                .unwrap_or_default();

            VertexError::Request(RequestError::ValidationError { message, details })
        }

        401 => VertexError::Authentication(AuthenticationError::InvalidToken),

        403 => VertexError::Authentication(AuthenticationError::PermissionDenied { message }),

        404 => VertexError::Response(ResponseError::NotFound { message }),

        429 => {
            let exhausted = error_details
                .as_ref()
                .is_some_and(|e| e.status.eq_ignore_ascii_case("RESOURCE_EXHAUSTED"));
            if exhausted {
                VertexError::RateLimit(RateLimitError::QuotaExceeded { retry_after: None })
            } else {
                VertexError::RateLimit(RateLimitError::TooManyRequests { retry_after: None })
            }
        }

        500 => VertexError::Server(ServerError::InternalError { message }),

        503 => VertexError::Server(ServerError::ServiceUnavailable { retry_after: None }),

        _ => VertexError::Response(ResponseError::HttpStatus { status, message }),
    }
}

/// Maps an HTTP status code and plain message to a `VertexError`.
pub fn map_http_status(status: u16, message: String) -> VertexError {
    map_http_status_with_body(status, message.as_bytes())
}

fn parse_validation_details(details: &[serde_json::Value]) -> Vec<ValidationDetail> {
    details
        .iter()
        .filter_map(|detail| detail.get("fieldViolations").and_then(|v| v.as_array()))
        .flatten()
        .filter_map(|violation| {
            let field = violation.get("field").and_then(|v| v.as_str()).unwrap_or("unknown");
            let description = violation.get("description").and_then(|v| v.as_str())?;
            Some(ValidationDetail {
                field: field.to_string(),
                description: description.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_http_status_401() {
        let error = map_http_status(401, "Request had invalid authentication credentials".to_string());
        assert!(matches!(
            error,
            VertexError::Authentication(AuthenticationError::InvalidToken)
        ));
    }

    #[test]
    fn test_map_http_status_400_with_field_violations() {
        let body = br#"{
            "error": {
                "code": 400,
                "message": "Request contains an invalid argument.",
                "status": "INVALID_ARGUMENT",
                "details": [{
                    "@type": "type.googleapis.com/google.rpc.BadRequest",
                    "fieldViolations": [
                        {"field": "contents", "description": "contents is required"}
                    ]
                }]
            }
        }"#;

        match map_http_status_with_body(400, body) {
            VertexError::Request(RequestError::ValidationError { message, details }) => {
                assert_eq!(message, "Request contains an invalid argument.");
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].field, "contents");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_map_http_status_429_resource_exhausted() {
        let body = br#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        let error = map_http_status_with_body(429, body);
        assert!(matches!(
            error,
            VertexError::RateLimit(RateLimitError::QuotaExceeded { .. })
        ));
        assert!(error.is_retryable());
    }

    #[test]
    fn test_map_http_status_unknown_keeps_body() {
        let error = map_http_status(418, "teapot".to_string());
        match error {
            VertexError::Response(ResponseError::HttpStatus { status, message }) => {
                assert_eq!(status, 418);
                assert_eq!(message, "teapot");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
