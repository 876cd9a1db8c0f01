//! Core HTTP transport abstractions for the Vertex AI client.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use reqwest::header::HeaderMap;
use std::pin::Pin;

use super::error::TransportError;

/// Outbound POST request for the transport layer.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Request URL.
    pub url: String,
    /// Request headers. Names are case-insensitive.
    pub headers: HeaderMap,
    /// JSON request body.
    pub body: Bytes,
}

/// HTTP response from the transport layer.
#[derive(Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Chunked stream for streaming responses.
pub type ChunkedStream = Pin<Box<dyn Stream<Item = Result<Bytes, TransportError>> + Send>>;

/// HTTP transport abstraction for testability.
///
/// Implementations issue exactly one POST per call and perform no retries.
/// Dropping the returned future aborts the request.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and receive the full response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;

    /// Send a request and receive the response body as a chunk stream.
    async fn send_streaming(&self, request: HttpRequest) -> Result<ChunkedStream, TransportError>;
}
