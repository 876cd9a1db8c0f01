//! Content-related types for the Vertex AI API.
//!
//! This module contains types for representing conversation turns and their parts.

use serde::{Deserialize, Serialize};

/// A part of a content turn: text, inline data, file data, a function call,
/// or a function response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Part {
    /// Text content.
    Text {
        /// The text content.
        text: String,
    },
    /// Inline binary data.
    InlineData {
        /// The inline data blob.
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
    /// Reference to data stored in Cloud Storage.
    FileData {
        /// The file data reference.
        #[serde(rename = "fileData")]
        file_data: FileData,
    },
    /// A function call.
    FunctionCall {
        /// The function call details.
        #[serde(rename = "functionCall")]
        function_call: FunctionCall,
    },
    /// A function response.
    FunctionResponse {
        /// The function response details.
        #[serde(rename = "functionResponse")]
        function_response: FunctionResponse,
    },
}

impl Part {
    /// Creates a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }
}

/// Binary data blob with MIME type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    /// The MIME type of the data.
    pub mime_type: String,
    /// Base64-encoded binary data.
    pub data: String,
}

/// Reference to file data, typically a `gs://` URI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    /// The MIME type of the file.
    pub mime_type: String,
    /// The URI of the file.
    pub file_uri: String,
}

/// A function call request from the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionCall {
    /// The name of the function to call.
    pub name: String,
    /// The arguments to pass to the function.
    pub args: serde_json::Value,
}

/// A function response to send back to the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionResponse {
    /// The name of the function that was called.
    pub name: String,
    /// The response data from the function.
    pub response: serde_json::Value,
}

/// A content turn with a role and parts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    /// The role of the content author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// The parts of the content.
    pub parts: Vec<Part>,
}

impl Content {
    /// Creates a user turn holding a single text part.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Some(Role::User),
            parts: vec![Part::text(text)],
        }
    }
}

/// The role of a turn author.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User role.
    User,
    /// Model role.
    Model,
    /// System role.
    System,
}

impl Role {
    /// Returns the wire name of the role.
    pub fn as_str(self) -> &'static str {
        use crate::constants::{MODEL_ROLE, SYSTEM_ROLE, USER_ROLE};
        match self {
            Role::User => USER_ROLE,
            Role::Model => MODEL_ROLE,
            Role::System => SYSTEM_ROLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_text_serialization() {
        let content = Content::user_text("hello");
        let value = serde_json::to_value(&content).unwrap();
        assert_eq!(value, json!({"role": "user", "parts": [{"text": "hello"}]}));
    }

    #[test]
    fn test_inline_data_uses_camel_case() {
        let part = Part::InlineData {
            inline_data: Blob {
                mime_type: "image/png".to_string(),
                data: "aGVsbG8=".to_string(),
            },
        };
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(
            value,
            json!({"inlineData": {"mimeType": "image/png", "data": "aGVsbG8="}})
        );
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Model.as_str(), "model");
        assert_eq!(Role::System.as_str(), "system");
    }
}
