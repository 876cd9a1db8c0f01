//! Process-wide constants shared by the request builder and normalizer.
//!
//! The values are computed once on first access and never change afterwards.

use once_cell::sync::Lazy;

/// Method name for unary content generation.
pub const GENERATE_CONTENT_METHOD: &str = "generateContent";

/// Method name for server-sent-events content generation.
pub const STREAMING_GENERATE_CONTENT_METHOD: &str = "streamGenerateContent";

/// Method name for token counting.
pub const COUNT_TOKENS_METHOD: &str = "countTokens";

/// Role name for user-authored turns.
pub const USER_ROLE: &str = "user";

/// Role name for model-authored turns.
pub const MODEL_ROLE: &str = "model";

/// Role name for system instructions.
pub const SYSTEM_ROLE: &str = "system";

/// Library name reported to the service.
pub const SDK_NAME: &str = env!("CARGO_PKG_NAME");

/// Library version reported to the service.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Domain suffix shared by Google-operated API endpoints.
pub const GOOGLE_API_DOMAIN_SUFFIX: &str = "googleapis.com";

/// Host suffix appended to a region to form the default endpoint.
pub const AIPLATFORM_HOST_SUFFIX: &str = "-aiplatform.googleapis.com";

/// Header carrying the client identifier.
pub const API_CLIENT_HEADER: &str = "x-goog-api-client";

/// Immutable library identity.
#[derive(Debug, Clone)]
pub struct SdkConstants {
    /// Value sent in the `User-Agent` header.
    pub user_agent: String,
}

/// Library identity, initialized on first use.
pub static CONSTANTS: Lazy<SdkConstants> = Lazy::new(|| SdkConstants {
    user_agent: format!("{SDK_NAME}/{SDK_VERSION}"),
});

/// Returns the `User-Agent` value sent with every request.
pub fn user_agent() -> &'static str {
    &CONSTANTS.user_agent
}
