//! Observability layer for the Vertex AI client.
//!
//! Structured logging with credential redaction, emitted through `tracing`.
//!
//! ```rust
//! use integrations_vertexai::observability::{Logger, StructuredLogger};
//! use integrations_vertexai::config::LogLevel;
//! use serde_json::json;
//!
//! let logger = StructuredLogger::new("vertexai.content")
//!     .with_level(LogLevel::Debug);
//!
//! logger.info("Generating content", json!({
//!     "model": "gemini-1.5-pro",
//!     "api_version": "v1"
//! }));
//! ```

pub mod logging;

pub use logging::{Logger, NoopLogger, StructuredLogger};
