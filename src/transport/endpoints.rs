//! Endpoint resolution for the Vertex AI API.
//!
//! URLs take the form
//! `https://{host}/{api_version}/{resource_path}:{resource_method}`, with
//! `?alt=sse` appended for the streaming method.

use std::fmt;

use url::Url;

use crate::constants::{AIPLATFORM_HOST_SUFFIX, STREAMING_GENERATE_CONTENT_METHOD};
use crate::error::VertexResult;

/// API version targeted by a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    /// Stable surface.
    #[default]
    V1,
    /// Preview surface, required for RAG stores and cached content.
    V1Beta1,
}

impl ApiVersion {
    /// Returns the path segment for this version.
    pub fn as_str(self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V1Beta1 => "v1beta1",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the host to call: the override verbatim, or the regional default.
///
/// ```
/// use integrations_vertexai::transport::endpoints;
///
/// assert_eq!(endpoints::resolve_host("us-central1", None), "us-central1-aiplatform.googleapis.com");
/// assert_eq!(endpoints::resolve_host("us-central1", Some("proxy.example.com")), "proxy.example.com");
/// ```
pub fn resolve_host(region: &str, api_endpoint: Option<&str>) -> String {
    match api_endpoint {
        Some(endpoint) => endpoint.to_string(),
        None => format!("{region}{AIPLATFORM_HOST_SUFFIX}"),
    }
}

/// Builds the full request URL.
///
/// The result is checked to be a well-formed URL but returned exactly as
/// assembled.
pub fn build_url(
    host: &str,
    api_version: ApiVersion,
    resource_path: &str,
    resource_method: &str,
) -> VertexResult<String> {
    let mut url = format!("https://{host}/{api_version}/{resource_path}:{resource_method}");
    if resource_method == STREAMING_GENERATE_CONTENT_METHOD {
        url.push_str("?alt=sse");
    }
    Url::parse(&url)?;
    Ok(url)
}

/// Constructs the resource path of a publisher model.
///
/// Accepts a bare model id, a `models/`-prefixed id, or a full
/// `projects/...` resource name (used verbatim).
///
/// ```
/// use integrations_vertexai::transport::endpoints;
///
/// assert_eq!(
///     endpoints::model_resource_path("my-project", "us-central1", "gemini-1.5-pro"),
///     "projects/my-project/locations/us-central1/publishers/google/models/gemini-1.5-pro"
/// );
/// ```
pub fn model_resource_path(project: &str, location: &str, model: &str) -> String {
    if model.starts_with("projects/") {
        return model.to_string();
    }
    let model = model.strip_prefix("models/").unwrap_or(model);
    format!("projects/{project}/locations/{location}/publishers/google/models/{model}")
}
