//! Validation functions for content generation requests.

use crate::error::{VertexError, VertexResult};
use crate::types::{GenerateContentRequest, GenerationConfig};

const TOP_K_MAX: f32 = 40.0;

const CONFLICTING_RETRIEVAL_STORES: &str =
    "Found both vertexAiSearch and vertexRagStore field in tools. Should set only one of them.";

/// Returns true if any tool retrieves from a RAG store.
pub fn has_vertex_rag_store(request: &GenerateContentRequest) -> bool {
    request
        .tools
        .iter()
        .flatten()
        .any(|tool| tool.has_vertex_rag_store())
}

/// Returns true if any tool retrieves from a Vertex AI Search data store.
pub fn has_vertex_ai_search(request: &GenerateContentRequest) -> bool {
    request
        .tools
        .iter()
        .flatten()
        .any(|tool| tool.has_vertex_ai_search())
}

/// Validate a generate content request.
///
/// A request may retrieve from Vertex AI Search or from a RAG store, never
/// both, whether the two are set on one tool or spread over several.
pub fn validate_generate_content_request(request: &GenerateContentRequest) -> VertexResult<()> {
    if has_vertex_ai_search(request) && has_vertex_rag_store(request) {
        return Err(VertexError::client_validation(CONFLICTING_RETRIEVAL_STORES));
    }
    Ok(())
}

/// Drops `top_k` unless it lies in `(0, 40]`. Other fields are untouched.
pub fn validate_generation_config(mut config: GenerationConfig) -> GenerationConfig {
    if let Some(top_k) = config.top_k {
        if !(top_k > 0.0 && top_k <= TOP_K_MAX) {
            tracing::debug!(top_k, "Dropping top_k outside (0, 40]");
            config.top_k = None;
        }
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Content, Retrieval, Tool, VertexAISearch, VertexRagStore};
    use pretty_assertions::assert_eq;

    const DATASTORE: &str = "projects/p/locations/global/collections/default_collection/dataStores/ds";

    fn request_with_tools(tools: Vec<Tool>) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user_text("What is in the corpus?")],
            tools: Some(tools),
            ..Default::default()
        }
    }

    fn both_in_one_tool() -> Tool {
        Tool {
            retrieval: Some(Retrieval {
                vertex_ai_search: Some(VertexAISearch {
                    datastore: DATASTORE.to_string(),
                }),
                vertex_rag_store: Some(VertexRagStore::default()),
                disable_attribution: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_both_stores_in_one_tool_fails() {
        let err = validate_generate_content_request(&request_with_tools(vec![both_in_one_tool()]))
            .unwrap_err();
        assert!(err.is_client_validation());
        assert!(err.to_string().contains(CONFLICTING_RETRIEVAL_STORES));
    }

    #[test]
    fn test_stores_split_across_tools_fails() {
        let request = request_with_tools(vec![
            Tool::vertex_ai_search(DATASTORE),
            Tool::vertex_rag_store(VertexRagStore::default()),
        ]);
        assert!(validate_generate_content_request(&request).is_err());
    }

    #[test]
    fn test_single_store_kinds_are_valid() {
        let search = request_with_tools(vec![Tool::vertex_ai_search(DATASTORE)]);
        let rag = request_with_tools(vec![Tool::vertex_rag_store(VertexRagStore::default())]);
        let repeated_rag = request_with_tools(vec![
            Tool::vertex_rag_store(VertexRagStore::default()),
            Tool::vertex_rag_store(VertexRagStore::default()),
        ]);
        assert!(validate_generate_content_request(&search).is_ok());
        assert!(validate_generate_content_request(&rag).is_ok());
        assert!(validate_generate_content_request(&repeated_rag).is_ok());
    }

    #[test]
    fn test_tools_without_retrieval_are_valid() {
        let plain = request_with_tools(vec![Tool::default()]);
        let empty = request_with_tools(vec![]);
        let none = GenerateContentRequest::default();
        assert!(validate_generate_content_request(&plain).is_ok());
        assert!(validate_generate_content_request(&empty).is_ok());
        assert!(validate_generate_content_request(&none).is_ok());
    }

    #[test]
    fn test_store_predicates() {
        let request = request_with_tools(vec![Tool::default(), Tool::vertex_ai_search(DATASTORE)]);
        assert!(has_vertex_ai_search(&request));
        assert!(!has_vertex_rag_store(&request));
        assert!(!has_vertex_ai_search(&GenerateContentRequest::default()));
    }

    fn config_with_top_k(top_k: Option<f32>) -> GenerationConfig {
        GenerationConfig {
            temperature: Some(0.2),
            top_k,
            max_output_tokens: Some(256),
            ..Default::default()
        }
    }

    #[test]
    fn test_top_k_out_of_range_is_removed() {
        for top_k in [0.0, 41.0, -3.0, 40.5] {
            let config = validate_generation_config(config_with_top_k(Some(top_k)));
            assert_eq!(config, config_with_top_k(None), "top_k = {top_k}");
        }
    }

    #[test]
    fn test_top_k_in_range_is_kept() {
        for top_k in [1.0, 40.0, 0.5] {
            let config = validate_generation_config(config_with_top_k(Some(top_k)));
            assert_eq!(config.top_k, Some(top_k));
        }
    }

    #[test]
    fn test_absent_top_k_is_unchanged() {
        let config = config_with_top_k(None);
        assert_eq!(validate_generation_config(config.clone()), config);
    }
}
