//! Request normalization and API version selection.

use crate::transport::ApiVersion;
use crate::types::{Content, ContentInput, GenerateContentRequest, GenerationConfig, SafetySetting};

use super::validation::has_vertex_rag_store;

/// Turns caller input into a structured request.
///
/// A text prompt becomes a single user turn carrying `generation_config` and
/// `safety_settings`. A structured request is returned as given and the two
/// extra arguments are not applied to it.
pub fn format_content_request(
    input: impl Into<ContentInput>,
    generation_config: Option<GenerationConfig>,
    safety_settings: Option<Vec<SafetySetting>>,
) -> GenerateContentRequest {
    match input.into() {
        ContentInput::Text(text) => GenerateContentRequest {
            contents: vec![Content::user_text(text)],
            generation_config,
            safety_settings,
            ..Default::default()
        },
        ContentInput::Request(request) => request,
    }
}

/// Selects `v1beta1` for RAG stores or cached content, `v1` otherwise.
pub fn get_api_version(request: &GenerateContentRequest) -> ApiVersion {
    if has_vertex_rag_store(request) || request.cached_content.is_some() {
        ApiVersion::V1Beta1
    } else {
        ApiVersion::V1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HarmBlockThreshold, HarmCategory, Part, Role, Tool, VertexRagStore};
    use pretty_assertions::assert_eq;

    fn generation_config() -> GenerationConfig {
        GenerationConfig {
            temperature: Some(0.4),
            ..Default::default()
        }
    }

    fn safety_settings() -> Vec<SafetySetting> {
        vec![SafetySetting {
            category: HarmCategory::DangerousContent,
            threshold: HarmBlockThreshold::BlockOnlyHigh,
        }]
    }

    #[test]
    fn test_text_becomes_single_user_turn() {
        let request = format_content_request("hello", None, None);
        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].role, Some(Role::User));
        assert_eq!(request.contents[0].parts, vec![Part::text("hello")]);
        assert_eq!(request.generation_config, None);
    }

    #[test]
    fn test_text_carries_config_and_safety() {
        let request = format_content_request(
            String::from("hello"),
            Some(generation_config()),
            Some(safety_settings()),
        );
        assert_eq!(request.generation_config, Some(generation_config()));
        assert_eq!(request.safety_settings, Some(safety_settings()));
    }

    #[test]
    fn test_structured_request_ignores_extra_arguments() {
        // Config and safety arguments are dropped for structured input.
        let original = GenerateContentRequest {
            contents: vec![Content::user_text("hi")],
            ..Default::default()
        };
        let request = format_content_request(
            original.clone(),
            Some(generation_config()),
            Some(safety_settings()),
        );
        assert_eq!(request, original);
    }

    #[test]
    fn test_api_version_plain_request() {
        let request = format_content_request("hello", None, None);
        assert_eq!(get_api_version(&request), ApiVersion::V1);
    }

    #[test]
    fn test_api_version_rag_store() {
        let request = GenerateContentRequest {
            tools: Some(vec![Tool::default(), Tool::vertex_rag_store(VertexRagStore::default())]),
            ..Default::default()
        };
        assert_eq!(get_api_version(&request), ApiVersion::V1Beta1);
    }

    #[test]
    fn test_api_version_cached_content() {
        let request = GenerateContentRequest {
            cached_content: Some("projects/p/locations/us-central1/cachedContents/123".to_string()),
            ..Default::default()
        };
        assert_eq!(get_api_version(&request), ApiVersion::V1Beta1);
    }

    #[test]
    fn test_api_version_search_only() {
        let request = GenerateContentRequest {
            tools: Some(vec![Tool::vertex_ai_search("projects/p/dataStores/ds")]),
            ..Default::default()
        };
        assert_eq!(get_api_version(&request), ApiVersion::V1);
    }
}
