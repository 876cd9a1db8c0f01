//! Core types for the Vertex AI API.
//!
//! This module contains the request, response, and option types used to
//! shape calls to the generative endpoints.

// Module declarations
pub mod common;
pub mod content;
pub mod generation;
pub mod options;
pub mod safety;
pub mod tools;

// Re-exports for token counting types
pub use common::{CountTokensRequest, CountTokensResponse};

// Re-exports for content types
pub use content::{Blob, Content, FileData, FunctionCall, FunctionResponse, Part, Role};

// Re-exports for generation types
pub use generation::{
    Candidate, ContentInput, FinishReason, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, PromptFeedback, UsageMetadata,
};

// Re-exports for option types
pub use options::RequestOptions;

// Re-exports for safety types
pub use safety::{HarmBlockThreshold, HarmCategory, HarmProbability, SafetyRating, SafetySetting};

// Re-exports for tool types
pub use tools::{
    CodeExecution, FunctionCallingConfig, FunctionCallingMode, FunctionDeclaration,
    GoogleSearchRetrieval, RagResource, Retrieval, Tool, ToolConfig, VertexAISearch,
    VertexRagStore,
};
