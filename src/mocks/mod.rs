//! Mock implementations for testing.
//!
//! This module provides a mock transport for testing the Vertex AI request
//! layer without network access.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::transport::{ChunkedStream, HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Mock HTTP transport for testing.
///
/// Tests enqueue responses and inspect the recorded requests afterwards. A
/// transport created with [`MockHttpTransport::never_responding`] records the
/// request and then waits forever, which is how timeouts are exercised.
///
/// # Example
///
/// ```
/// use integrations_vertexai::mocks::MockHttpTransport;
///
/// let transport = MockHttpTransport::new();
/// transport.enqueue_json_response(200, r#"{"totalTokens": 3}"#);
/// transport.verify_request_count(0);
/// ```
#[derive(Clone, Default)]
pub struct MockHttpTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    streaming_responses: Arc<Mutex<VecDeque<Result<Vec<Bytes>, TransportError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    never_respond: Arc<AtomicBool>,
}

impl MockHttpTransport {
    /// Create a new mock HTTP transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport whose calls never complete.
    pub fn never_responding() -> Self {
        let transport = Self::default();
        transport.never_respond.store(true, Ordering::SeqCst);
        transport
    }

    /// Enqueue a response to be returned by the next request.
    pub fn enqueue_response(&self, response: Result<HttpResponse, TransportError>) {
        lock(&self.responses).push_back(response);
    }

    /// Enqueue a JSON response with the given status code and body.
    pub fn enqueue_json_response(&self, status: u16, body: &str) {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        self.enqueue_response(Ok(HttpResponse {
            status,
            headers,
            body: Bytes::from(body.to_string()),
        }));
    }

    /// Enqueue an error response.
    pub fn enqueue_error(&self, error: TransportError) {
        self.enqueue_response(Err(error));
    }

    /// Enqueue a streaming response with multiple chunks.
    pub fn enqueue_streaming_response(&self, chunks: Vec<Bytes>) {
        lock(&self.streaming_responses).push_back(Ok(chunks));
    }

    /// Get all requests that were made.
    pub fn get_requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    /// Get the last request that was made.
    pub fn last_request(&self) -> Option<HttpRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Number of requests that reached the transport.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Verify that exactly `expected` requests were made.
    pub fn verify_request_count(&self, expected: usize) {
        let actual = self.request_count();
        assert_eq!(actual, expected, "Expected {} requests, got {}", expected, actual);
    }

    /// Verify that a request URL contains the given fragment.
    pub fn verify_url(&self, index: usize, url_contains: &str) {
        let requests = lock(&self.requests);
        assert!(index < requests.len(), "No request at index {}", index);

        let url = &requests[index].url;
        assert!(
            url.contains(url_contains),
            "Expected URL to contain '{}', got '{}'",
            url_contains,
            url
        );
    }

    /// Verify the value of a header on a recorded request.
    pub fn verify_header(&self, index: usize, header_name: &str, header_value: &str) {
        let requests = lock(&self.requests);
        assert!(index < requests.len(), "No request at index {}", index);

        let actual_value = requests[index]
            .headers
            .get(header_name)
            .and_then(|v| v.to_str().ok());
        assert_eq!(
            actual_value,
            Some(header_value),
            "Expected header '{}' to be '{}', got {:?}",
            header_name,
            header_value,
            actual_value
        );
    }

    fn record(&self, request: HttpRequest) {
        lock(&self.requests).push(request);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.record(request);

        if self.never_respond.load(Ordering::SeqCst) {
            futures::future::pending::<()>().await;
        }

        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Connection(
                    "No response configured in MockHttpTransport".into(),
                ))
            })
    }

    async fn send_streaming(&self, request: HttpRequest) -> Result<ChunkedStream, TransportError> {
        self.record(request);

        if self.never_respond.load(Ordering::SeqCst) {
            futures::future::pending::<()>().await;
        }

        let chunks = lock(&self.streaming_responses)
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Connection(
                    "No streaming response configured in MockHttpTransport".into(),
                ))
            })?;

        let stream = stream::iter(chunks.into_iter().map(Ok));
        Ok(Box::pin(stream))
    }
}
