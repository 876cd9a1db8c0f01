//! Tool-related types for the Vertex AI API.
//!
//! This module contains types for defining the capabilities a model may use,
//! including retrieval from Vertex AI Search data stores and RAG corpora.

use serde::{Deserialize, Serialize};

/// A tool that the model can use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Function declarations available to the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_declarations: Option<Vec<FunctionDeclaration>>,
    /// Retrieval from an external knowledge source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieval: Option<Retrieval>,
    /// Google search retrieval capability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search_retrieval: Option<GoogleSearchRetrieval>,
    /// Code execution capability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_execution: Option<CodeExecution>,
}

impl Tool {
    /// Creates a tool that retrieves from a Vertex AI Search data store.
    pub fn vertex_ai_search(datastore: impl Into<String>) -> Self {
        Self {
            retrieval: Some(Retrieval {
                vertex_ai_search: Some(VertexAISearch {
                    datastore: datastore.into(),
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Creates a tool that retrieves from a Vertex RAG store.
    pub fn vertex_rag_store(store: VertexRagStore) -> Self {
        Self {
            retrieval: Some(Retrieval {
                vertex_rag_store: Some(store),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Returns true if this tool retrieves from a RAG store.
    pub fn has_vertex_rag_store(&self) -> bool {
        self.retrieval
            .as_ref()
            .is_some_and(|r| r.vertex_rag_store.is_some())
    }

    /// Returns true if this tool retrieves from a Vertex AI Search data store.
    pub fn has_vertex_ai_search(&self) -> bool {
        self.retrieval
            .as_ref()
            .is_some_and(|r| r.vertex_ai_search.is_some())
    }
}

/// Declaration of a function that the model can call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionDeclaration {
    /// The name of the function.
    pub name: String,
    /// The description of the function.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The parameters schema for the function.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
}

/// Retrieval capability. At most one knowledge source should be set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Retrieval {
    /// Vertex AI Search data store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertex_ai_search: Option<VertexAISearch>,
    /// Vertex RAG store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertex_rag_store: Option<VertexRagStore>,
    /// Disable attribution of retrieved content in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_attribution: Option<bool>,
}

/// Vertex AI Search data store reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct VertexAISearch {
    /// Fully qualified data store resource name,
    /// `projects/{project}/locations/{location}/collections/{collection}/dataStores/{dataStore}`.
    pub datastore: String,
}

/// Vertex RAG store reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct VertexRagStore {
    /// RAG resources to retrieve from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rag_resources: Option<Vec<RagResource>>,
    /// Number of top contexts to retrieve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_top_k: Option<u32>,
    /// Only return contexts with vector distance smaller than the threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_distance_threshold: Option<f64>,
}

/// A RAG corpus and optional file subset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RagResource {
    /// RAG corpus resource name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rag_corpus: Option<String>,
    /// Files within the corpus to restrict retrieval to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rag_file_ids: Option<Vec<String>>,
}

/// Google search retrieval tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GoogleSearchRetrieval {}

/// Code execution tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CodeExecution {}

/// Configuration for tool usage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    /// Function calling configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_calling_config: Option<FunctionCallingConfig>,
}

/// Configuration for function calling behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCallingConfig {
    /// The mode for function calling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<FunctionCallingMode>,
    /// List of allowed function names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_function_names: Option<Vec<String>>,
}

/// Mode for function calling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FunctionCallingMode {
    /// Let the model decide.
    Auto,
    /// Always call a function.
    Any,
    /// Never call functions.
    None,
}
