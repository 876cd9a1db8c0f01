//! Content service implementation wiring normalization, request building and
//! transport together.

use std::sync::Arc;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::ContentService;
use super::request::{format_content_request, get_api_version};
use super::validation::{validate_generate_content_request, validate_generation_config};
use crate::config::VertexConfig;
use crate::constants::{COUNT_TOKENS_METHOD, GENERATE_CONTENT_METHOD, STREAMING_GENERATE_CONTENT_METHOD};
use crate::error::{map_http_status_with_body, VertexResult};
use crate::observability::{Logger, StructuredLogger};
use crate::transport::{endpoints, ApiVersion, ChunkedStream, HttpResponse, HttpTransport, RequestBuilder};
use crate::types::{
    Content, ContentInput, CountTokensRequest, CountTokensResponse, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, RequestOptions, SafetySetting, Tool,
};

/// Content service bound to one model.
pub struct ContentServiceImpl {
    config: Arc<VertexConfig>,
    transport: Arc<dyn HttpTransport>,
    model: String,
    resource_path: String,
    generation_config: Option<GenerationConfig>,
    safety_settings: Option<Vec<SafetySetting>>,
    tools: Option<Vec<Tool>>,
    system_instruction: Option<Content>,
    logger: Arc<dyn Logger>,
}

impl ContentServiceImpl {
    /// Create a content service for `model`.
    pub fn new(
        config: Arc<VertexConfig>,
        transport: Arc<dyn HttpTransport>,
        model: impl Into<String>,
    ) -> Self {
        let model = model.into();
        let resource_path = endpoints::model_resource_path(&config.project, &config.location, &model);
        let logger = Arc::new(StructuredLogger::new("vertexai.content").with_level(config.log_level));

        Self {
            config,
            transport,
            model,
            resource_path,
            generation_config: None,
            safety_settings: None,
            tools: None,
            system_instruction: None,
            logger,
        }
    }

    /// Set the generation config applied to text prompts.
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }

    /// Set the safety settings applied to text prompts.
    pub fn with_safety_settings(mut self, settings: Vec<SafetySetting>) -> Self {
        self.safety_settings = Some(settings);
        self
    }

    /// Set tools used when a request carries none.
    pub fn with_tools(mut self, tools: Vec<Tool>) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Set the system instruction used when a request carries none.
    pub fn with_system_instruction(mut self, instruction: Content) -> Self {
        self.system_instruction = Some(instruction);
        self
    }

    /// Replace the logger.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// The model this service targets.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The resource path requests are sent to.
    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    /// Normalize and validate caller input into the request that is sent.
    pub fn prepare_request(&self, input: ContentInput) -> VertexResult<GenerateContentRequest> {
        let mut request = format_content_request(
            input,
            self.generation_config.clone(),
            self.safety_settings.clone(),
        );

        if request.tools.is_none() {
            request.tools = self.tools.clone();
        }
        if request.system_instruction.is_none() {
            request.system_instruction = self.system_instruction.clone();
        }

        validate_generate_content_request(&request)?;
        request.generation_config = request.generation_config.map(validate_generation_config);

        Ok(request)
    }

    fn request_builder(
        &self,
        method: &str,
        api_version: ApiVersion,
        options: Option<RequestOptions>,
    ) -> RequestBuilder {
        RequestBuilder::new(&self.config.location, &self.resource_path, method)
            .maybe_token(self.config.access_token.clone())
            .api_endpoint(self.config.api_endpoint.clone())
            .request_options(options.or_else(|| self.config.default_request_options.clone()))
            .api_version(api_version)
    }

    fn decode<T: DeserializeOwned>(&self, response: HttpResponse) -> VertexResult<T> {
        if !response.is_success() {
            self.logger.warn(
                "Vertex AI request failed",
                json!({ "model": self.model, "status": response.status }),
            );
            return Err(map_http_status_with_body(response.status, &response.body));
        }
        Ok(serde_json::from_slice(&response.body)?)
    }
}

#[async_trait]
impl ContentService for ContentServiceImpl {
    async fn generate_content(
        &self,
        input: ContentInput,
        options: Option<RequestOptions>,
    ) -> VertexResult<GenerateContentResponse> {
        let request = self.prepare_request(input)?;
        let api_version = get_api_version(&request);

        self.logger.debug(
            "Generating content",
            json!({ "model": self.model, "api_version": api_version.as_str() }),
        );

        let response = self
            .request_builder(GENERATE_CONTENT_METHOD, api_version, options)
            .post(self.transport.as_ref(), &request)
            .await?;

        self.decode(response)
    }

    async fn generate_content_stream(
        &self,
        input: ContentInput,
        options: Option<RequestOptions>,
    ) -> VertexResult<ChunkedStream> {
        let request = self.prepare_request(input)?;
        let api_version = get_api_version(&request);

        self.logger.debug(
            "Streaming content",
            json!({ "model": self.model, "api_version": api_version.as_str() }),
        );

        self.request_builder(STREAMING_GENERATE_CONTENT_METHOD, api_version, options)
            .post_streaming(self.transport.as_ref(), &request)
            .await
    }

    async fn count_tokens(
        &self,
        request: CountTokensRequest,
        options: Option<RequestOptions>,
    ) -> VertexResult<CountTokensResponse> {
        self.logger.debug("Counting tokens", json!({ "model": self.model }));

        let response = self
            .request_builder(COUNT_TOKENS_METHOD, ApiVersion::V1, options)
            .post(self.transport.as_ref(), &request)
            .await?;

        self.decode(response)
    }
}
