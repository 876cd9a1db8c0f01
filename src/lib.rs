//! # Google Vertex AI Request Layer
//!
//! Request shaping and dispatch for the Vertex AI generative REST API.
//!
//! ## Features
//!
//! - Normalization of text prompts and structured `generateContent` requests
//! - Client-side validation of retrieval tools and sampling parameters
//! - API version selection (`v1` / `v1beta1`) from request contents
//! - Endpoint resolution for regional and overridden hosts, with SSE streaming
//! - Header merging with reserved-header precedence per endpoint kind
//! - Optional per-call timeouts, no hidden retries
//! - Secure token handling with `SecretString`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_vertexai::{ContentService, RequestOptions, VertexClient, VertexConfig};
//! use secrecy::SecretString;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VertexConfig::builder()
//!         .project("my-project")
//!         .access_token(SecretString::new("ya29.token".into()))
//!         .build()?;
//!
//!     let model = VertexClient::new(config)?.generative_model("gemini-1.5-pro");
//!     let response = model
//!         .generate_content("Why is the sky blue?".into(), Some(RequestOptions::new().timeout_ms(30_000)))
//!         .await?;
//!     println!("{:?}", response.candidates);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `client` - Client entry point
//! - `config` - Configuration types and builder
//! - `constants` - Method names, roles, and library identity
//! - `error` - Error types and HTTP status mapping
//! - `transport` - Endpoints, header policy, request builder, HTTP transport
//! - `types` - Request, response, and option types
//! - `services` - Content service and request normalization

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod observability;
pub mod services;
pub mod transport;
pub mod types;

// Development/testing modules - always available for integration tests
pub mod mocks;

// Re-exports for convenience
pub use client::VertexClient;
pub use config::{LogLevel, VertexConfig, VertexConfigBuilder, DEFAULT_LOCATION};
pub use error::{
    // Main error types
    VertexError,
    VertexResult,
    // Error categories
    AuthenticationError,
    ConfigurationError,
    NetworkError,
    RateLimitError,
    RequestError,
    ResponseError,
    ServerError,
    ValidationDetail,
    // Error mapping utilities
    map_http_status,
    map_http_status_with_body,
};
pub use transport::{
    ApiVersion, ChunkedStream, HttpRequest, HttpResponse, HttpTransport, RequestBuilder,
    ReqwestTransport, TransportError,
};

// Type re-exports
pub use types::{
    Content, ContentInput, CountTokensRequest, CountTokensResponse, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, Part, RequestOptions, Role, SafetySetting, Tool,
};

// Service re-exports
pub use services::{
    format_content_request, get_api_version, has_vertex_ai_search, has_vertex_rag_store,
    validate_generate_content_request, validate_generation_config, ContentService,
    ContentServiceImpl,
};
