//! Content generation service for the Vertex AI API.

mod request;
mod service;
mod validation;

use async_trait::async_trait;
use crate::error::VertexResult;
use crate::transport::ChunkedStream;
use crate::types::{
    ContentInput, CountTokensRequest, CountTokensResponse, GenerateContentResponse,
    RequestOptions,
};

pub use request::{format_content_request, get_api_version};
pub use service::ContentServiceImpl;
pub use validation::{
    has_vertex_ai_search, has_vertex_rag_store, validate_generate_content_request,
    validate_generation_config,
};

/// Service for content generation with a single model.
///
/// `options` overrides the configured default request options for one call.
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Generate content (non-streaming).
    async fn generate_content(
        &self,
        input: ContentInput,
        options: Option<RequestOptions>,
    ) -> VertexResult<GenerateContentResponse>;

    /// Generate content in server-sent-events mode.
    ///
    /// The returned stream yields raw response bytes.
    async fn generate_content_stream(
        &self,
        input: ContentInput,
        options: Option<RequestOptions>,
    ) -> VertexResult<ChunkedStream>;

    /// Count tokens for content.
    async fn count_tokens(
        &self,
        request: CountTokensRequest,
        options: Option<RequestOptions>,
    ) -> VertexResult<CountTokensResponse>;
}
