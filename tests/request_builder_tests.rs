//! Integration tests for request building and dispatch.

use integrations_vertexai::constants::{GENERATE_CONTENT_METHOD, STREAMING_GENERATE_CONTENT_METHOD};
use integrations_vertexai::mocks::MockHttpTransport;
use integrations_vertexai::transport::{ApiVersion, RequestBuilder};
use integrations_vertexai::types::RequestOptions;
use integrations_vertexai::{format_content_request, VertexError};
use secrecy::SecretString;
use std::time::{Duration, Instant};

const REGION: &str = "us-central1";
const RESOURCE_PATH: &str = "projects/test-project/locations/us-central1/publishers/google/models/gemini-pro";
const CUSTOM_CLIENT: &str = "custom-client/1.0";
const OPTION_CLIENT: &str = "option-client/2.0";

fn builder() -> RequestBuilder {
    RequestBuilder::new(REGION, RESOURCE_PATH, GENERATE_CONTENT_METHOD)
        .token(SecretString::new("sdk-token".into()))
}

fn options_overriding_reserved_headers() -> RequestOptions {
    RequestOptions::new()
        .header("Content-Type", "application/x-custom")
        .header("Authorization", "Bearer caller-token")
        .header("X-Goog-Api-Client", CUSTOM_CLIENT)
        .api_client(OPTION_CLIENT)
}

#[tokio::test]
async fn test_default_endpoint_keeps_sdk_reserved_headers() {
    // Arrange
    let transport = MockHttpTransport::new();
    transport.enqueue_json_response(200, r#"{"candidates": []}"#);
    let body = format_content_request("hello", None, None);

    // Act
    let response = builder()
        .request_options(Some(options_overriding_reserved_headers()))
        .post(&transport, &body)
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status, 200);
    transport.verify_request_count(1);
    transport.verify_url(
        0,
        "https://us-central1-aiplatform.googleapis.com/v1/projects/test-project/locations/us-central1/publishers/google/models/gemini-pro:generateContent",
    );
    transport.verify_header(0, "content-type", "application/json");
    transport.verify_header(0, "authorization", "Bearer sdk-token");
    transport.verify_header(0, "x-goog-api-client", &format!("{CUSTOM_CLIENT}, {OPTION_CLIENT}"));
}

#[tokio::test]
async fn test_internal_override_endpoint_keeps_sdk_reserved_headers() {
    let transport = MockHttpTransport::new();
    transport.enqueue_json_response(200, "{}");

    builder()
        .api_endpoint(Some("us-central1-autopush-aiplatform.sandbox.googleapis.com".to_string()))
        .request_options(Some(options_overriding_reserved_headers()))
        .post(&transport, &serde_json::json!({}))
        .await
        .unwrap();

    transport.verify_header(0, "content-type", "application/json");
    transport.verify_header(0, "x-goog-api-client", &format!("{CUSTOM_CLIENT}, {OPTION_CLIENT}"));
}

#[tokio::test]
async fn test_external_endpoint_takes_caller_reserved_headers() {
    let transport = MockHttpTransport::new();
    transport.enqueue_json_response(200, "{}");

    builder()
        .api_endpoint(Some("llm-gateway.example.com".to_string()))
        .request_options(Some(options_overriding_reserved_headers()))
        .post(&transport, &serde_json::json!({}))
        .await
        .unwrap();

    transport.verify_url(0, "https://llm-gateway.example.com/v1/");
    transport.verify_header(0, "content-type", "application/x-custom");
    transport.verify_header(0, "authorization", "Bearer caller-token");
    transport.verify_header(0, "x-goog-api-client", &format!("{CUSTOM_CLIENT}, {OPTION_CLIENT}"));
}

#[tokio::test]
async fn test_line_break_in_api_client_never_reaches_transport() {
    let transport = MockHttpTransport::new();
    transport.enqueue_json_response(200, "{}");

    for api_client in ["client\nname", "client\rname"] {
        let result = builder()
            .request_options(Some(RequestOptions::new().api_client(api_client)))
            .post(&transport, &serde_json::json!({}))
            .await;

        let err = result.unwrap_err();
        assert!(err.is_client_validation(), "unexpected error: {err}");
    }

    transport.verify_request_count(0);
}

#[tokio::test]
async fn test_line_break_in_custom_header_never_reaches_transport() {
    let transport = MockHttpTransport::new();

    let by_value = RequestOptions::new().header("X-Custom", "value\r\nX-Injected: 1");
    let by_name = RequestOptions::new().header("X-Cus\ntom", "value");

    for options in [by_value, by_name] {
        let err = builder()
            .request_options(Some(options))
            .post_streaming(&transport, &serde_json::json!({}))
            .await
            .err()
            .unwrap();
        assert!(err.is_client_validation());
    }

    transport.verify_request_count(0);
}

#[tokio::test]
async fn test_timeout_aborts_pending_request() {
    // Arrange
    let transport = MockHttpTransport::never_responding();
    let started = Instant::now();

    // Act
    let result = builder()
        .request_options(Some(RequestOptions::new().timeout_ms(5)))
        .post(&transport, &serde_json::json!({}))
        .await;

    // Assert
    let err = result.unwrap_err();
    assert!(err.is_timeout(), "unexpected error: {err}");
    assert!(matches!(
        err,
        VertexError::Network(integrations_vertexai::NetworkError::Timeout { duration })
            if duration == Duration::from_millis(5)
    ));
    assert!(started.elapsed() < Duration::from_secs(5));
    transport.verify_request_count(1);
}

#[tokio::test]
async fn test_negative_timeout_attaches_no_deadline() {
    let transport = MockHttpTransport::never_responding();

    let request = builder().request_options(Some(RequestOptions::new().timeout_ms(-1)));
    let body = serde_json::json!({});
    let call = request.post(&transport, &body);

    // Without a caller-side deadline the call stays pending.
    let outcome = tokio::time::timeout(Duration::from_millis(50), call).await;
    assert!(outcome.is_err());
}

#[tokio::test]
async fn test_streaming_request_uses_sse_and_beta_version() {
    let transport = MockHttpTransport::new();
    transport.enqueue_streaming_response(vec![bytes::Bytes::from_static(b"data: {}\n\n")]);

    let stream = RequestBuilder::new(REGION, RESOURCE_PATH, STREAMING_GENERATE_CONTENT_METHOD)
        .api_version(ApiVersion::V1Beta1)
        .post_streaming(&transport, &serde_json::json!({}))
        .await;

    assert!(stream.is_ok());
    let request = transport.last_request().unwrap();
    assert!(request.url.contains("/v1beta1/"));
    assert!(request.url.ends_with(":streamGenerateContent?alt=sse"));
}

#[tokio::test]
async fn test_transport_failure_passes_through() {
    let transport = MockHttpTransport::new();
    transport.enqueue_error(integrations_vertexai::TransportError::Connection("refused".into()));

    let err = builder()
        .post(&transport, &serde_json::json!({}))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        VertexError::Network(integrations_vertexai::NetworkError::ConnectionFailed { .. })
    ));
    transport.verify_request_count(1);
}
