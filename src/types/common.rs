//! Token counting types.

use serde::{Deserialize, Serialize};

use super::content::Content;

/// Request to count tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CountTokensRequest {
    /// The contents to count tokens for.
    pub contents: Vec<Content>,
}

impl From<&str> for CountTokensRequest {
    fn from(text: &str) -> Self {
        Self {
            contents: vec![Content::user_text(text)],
        }
    }
}

/// Response from counting tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CountTokensResponse {
    /// The total number of tokens.
    pub total_tokens: i32,
    /// The total number of billable characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_billable_characters: Option<i32>,
}
