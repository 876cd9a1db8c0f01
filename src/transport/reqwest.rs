//! Reqwest-based HTTP transport implementation.

use super::http::{HttpTransport, HttpRequest, HttpResponse, ChunkedStream};
use super::error::TransportError;
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use std::time::Duration;

/// Reqwest-based HTTP transport.
///
/// No overall request timeout is configured on the client; per-call
/// timeouts are applied by [`RequestBuilder`](super::RequestBuilder).
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a new reqwest transport with the given connect timeout.
    pub fn new(connect_timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| TransportError::Connection(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn execute(&self, request: HttpRequest) -> Result<reqwest::Response, TransportError> {
        self.client
            .post(&request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await
            .map_err(|e| {
                // Only the connect phase has a deadline on this client.
                if e.is_connect() || e.is_timeout() {
                    TransportError::Connection(e.to_string())
                } else {
                    TransportError::Request(e.to_string())
                }
            })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let response = self.execute(request).await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await
            .map_err(|e| TransportError::Request(format!("Failed to read response body: {}", e)))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    async fn send_streaming(&self, request: HttpRequest) -> Result<ChunkedStream, TransportError> {
        let response = self.execute(request).await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.bytes().await
                .map_err(|e| TransportError::Request(format!("Failed to read error response: {}", e)))?;
            return Err(TransportError::Request(
                format!("HTTP error {}: {}", status.as_u16(), String::from_utf8_lossy(&body))
            ));
        }

        let stream = response.bytes_stream();
        let mapped_stream = Box::pin(stream.map(|result| {
            result.map_err(|e| TransportError::Request(format!("Stream error: {}", e)))
        }));

        Ok(mapped_stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reqwest_transport_creation() {
        let transport = ReqwestTransport::new(Duration::from_secs(10));
        assert!(transport.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_connection_error() {
        let transport = ReqwestTransport::new(Duration::from_millis(1)).unwrap();
        let request = HttpRequest {
            url: "http://10.255.255.1:81/v1/projects/p:generateContent".to_string(),
            headers: reqwest::header::HeaderMap::new(),
            body: bytes::Bytes::new(),
        };

        let err = transport.send(request).await.unwrap_err();

        assert!(matches!(err, TransportError::Connection(_)), "unexpected error: {err}");
        assert!(!crate::error::VertexError::from(err).is_timeout());
    }
}
