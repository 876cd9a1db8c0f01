//! HTTP request builder for the Vertex AI API.
//!
//! This module provides the `RequestBuilder` for assembling one outbound POST:
//! endpoint URL, merged headers, JSON body, and an optional caller-side
//! timeout.

use bytes::Bytes;
use reqwest::header::HeaderMap;
use secrecy::SecretString;
use serde::Serialize;
use std::future::Future;
use std::time::Duration;

use crate::error::{NetworkError, VertexError, VertexResult};
use crate::types::RequestOptions;
use super::endpoints::{self, ApiVersion};
use super::headers;
use super::http::{ChunkedStream, HttpRequest, HttpResponse, HttpTransport};
use super::error::TransportError;

/// Builder for a single POST request to the Vertex AI API.
///
/// # Example
///
/// ```
/// use integrations_vertexai::transport::{ApiVersion, RequestBuilder};
/// use integrations_vertexai::constants::GENERATE_CONTENT_METHOD;
/// use secrecy::SecretString;
///
/// let builder = RequestBuilder::new(
///     "us-central1",
///     "projects/p/locations/us-central1/publishers/google/models/gemini-pro",
///     GENERATE_CONTENT_METHOD,
/// )
/// .token(SecretString::new("token".into()))
/// .api_version(ApiVersion::V1);
///
/// let request = builder.build_request(&serde_json::json!({"contents": []})).unwrap();
/// assert!(request.url.starts_with("https://us-central1-aiplatform.googleapis.com/v1/"));
/// ```
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    region: String,
    resource_path: String,
    resource_method: String,
    token: Option<SecretString>,
    api_endpoint: Option<String>,
    request_options: Option<RequestOptions>,
    api_version: ApiVersion,
}

impl RequestBuilder {
    /// Creates a builder for `{resource_path}:{resource_method}` in `region`.
    pub fn new(
        region: impl Into<String>,
        resource_path: impl Into<String>,
        resource_method: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            resource_path: resource_path.into(),
            resource_method: resource_method.into(),
            token: None,
            api_endpoint: None,
            request_options: None,
            api_version: ApiVersion::default(),
        }
    }

    /// Sets the bearer token.
    pub fn token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the bearer token if one is given.
    pub fn maybe_token(mut self, token: Option<SecretString>) -> Self {
        self.token = token;
        self
    }

    /// Overrides the regional endpoint host.
    pub fn api_endpoint(mut self, api_endpoint: Option<String>) -> Self {
        self.api_endpoint = api_endpoint;
        self
    }

    /// Sets per-call transport options.
    pub fn request_options(mut self, options: Option<RequestOptions>) -> Self {
        self.request_options = options;
        self
    }

    /// Sets the API version.
    pub fn api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = api_version;
        self
    }

    /// Returns the host the request will be sent to.
    pub fn host(&self) -> String {
        endpoints::resolve_host(&self.region, self.api_endpoint.as_deref())
    }

    /// Builds the request URL.
    pub fn build_url(&self) -> VertexResult<String> {
        endpoints::build_url(
            &self.host(),
            self.api_version,
            &self.resource_path,
            &self.resource_method,
        )
    }

    /// Builds the outgoing headers, validating caller-supplied options.
    pub fn build_headers(&self) -> VertexResult<HeaderMap> {
        let necessary = headers::necessary_headers(self.token.as_ref())?;
        let is_internal = headers::is_internal_endpoint(&self.host());
        headers::merge_headers(&necessary, self.request_options.as_ref(), is_internal)
    }

    /// Returns the caller-side timeout, if one applies.
    pub fn timeout(&self) -> Option<Duration> {
        self.request_options
            .as_ref()
            .and_then(RequestOptions::timeout_duration)
    }

    /// Builds the complete request without sending it.
    pub fn build_request<T: Serialize + ?Sized>(&self, body: &T) -> VertexResult<HttpRequest> {
        let headers = self.build_headers()?;
        let url = self.build_url()?;
        let body = Bytes::from(serde_json::to_vec(body)?);

        Ok(HttpRequest { url, headers, body })
    }

    /// Issues the POST and returns the transport's response unchanged.
    ///
    /// Input validation errors are returned before the transport is called.
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        transport: &dyn HttpTransport,
        body: &T,
    ) -> VertexResult<HttpResponse> {
        let request = self.build_request(body)?;
        tracing::debug!(
            url = %request.url,
            api_version = %self.api_version,
            timeout_ms = ?self.timeout().map(|t| t.as_millis()),
            "Sending Vertex AI request"
        );
        self.with_timeout(transport.send(request)).await
    }

    /// Issues the POST and returns the response body as a raw chunk stream.
    ///
    /// The timeout covers obtaining the stream, not consuming it.
    pub async fn post_streaming<T: Serialize + ?Sized>(
        &self,
        transport: &dyn HttpTransport,
        body: &T,
    ) -> VertexResult<ChunkedStream> {
        let request = self.build_request(body)?;
        tracing::debug!(
            url = %request.url,
            api_version = %self.api_version,
            "Opening Vertex AI stream"
        );
        self.with_timeout(transport.send_streaming(request)).await
    }

    async fn with_timeout<F, R>(&self, call: F) -> VertexResult<R>
    where
        F: Future<Output = Result<R, TransportError>>,
    {
        match self.timeout() {
            Some(duration) => match tokio::time::timeout(duration, call).await {
                Ok(result) => Ok(result?),
                Err(_) => {
                    tracing::debug!(timeout_ms = duration.as_millis(), "Vertex AI request aborted");
                    Err(VertexError::Network(NetworkError::Timeout { duration }))
                }
            },
            None => Ok(call.await?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{COUNT_TOKENS_METHOD, STREAMING_GENERATE_CONTENT_METHOD};
    use serde_json::json;

    const MODEL_PATH: &str = "projects/p/locations/us-central1/publishers/google/models/gemini-pro";

    fn builder(method: &str) -> RequestBuilder {
        RequestBuilder::new("us-central1", MODEL_PATH, method)
            .token(SecretString::new("test-token".into()))
    }

    #[test]
    fn test_build_request_defaults() {
        let request = builder(COUNT_TOKENS_METHOD)
            .build_request(&json!({"contents": []}))
            .unwrap();

        assert_eq!(
            request.url,
            format!("https://us-central1-aiplatform.googleapis.com/v1/{MODEL_PATH}:countTokens")
        );
        assert_eq!(request.headers.get("authorization").unwrap(), "Bearer test-token");
        assert_eq!(request.headers.get("content-type").unwrap(), "application/json");
        assert_eq!(request.body, Bytes::from_static(br#"{"contents":[]}"#));
    }

    #[test]
    fn test_build_request_with_endpoint_and_version() {
        let request = builder(STREAMING_GENERATE_CONTENT_METHOD)
            .api_endpoint(Some("proxy.example.com".to_string()))
            .api_version(ApiVersion::V1Beta1)
            .build_request(&json!({}))
            .unwrap();

        assert_eq!(
            request.url,
            format!("https://proxy.example.com/v1beta1/{MODEL_PATH}:streamGenerateContent?alt=sse")
        );
    }

    #[test]
    fn test_timeout_resolution() {
        assert_eq!(builder(COUNT_TOKENS_METHOD).timeout(), None);
        let with_timeout = builder(COUNT_TOKENS_METHOD)
            .request_options(Some(RequestOptions::new().timeout_ms(250)));
        assert_eq!(with_timeout.timeout(), Some(Duration::from_millis(250)));
        let negative = builder(COUNT_TOKENS_METHOD)
            .request_options(Some(RequestOptions::new().timeout_ms(-5)));
        assert_eq!(negative.timeout(), None);
    }

    #[test]
    fn test_debug_output_hides_token() {
        let rendered = format!("{:?}", builder(COUNT_TOKENS_METHOD));
        assert!(!rendered.contains("test-token"));
    }
}
