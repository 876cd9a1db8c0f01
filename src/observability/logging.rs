//! Structured logging for the Vertex AI client.
//!
//! Provides trait-based logging with structured field support.

use serde_json::Value;
use crate::config::LogLevel;

const REDACTED: &str = "***REDACTED***";

const SENSITIVE_KEYS: [&str; 8] = [
    "token", "access_token", "accessToken",
    "authorization", "Authorization",
    "secret", "credential", "auth",
];

/// Logger trait for structured logging.
///
/// Implementations can integrate with various logging backends.
pub trait Logger: Send + Sync {
    /// Log a debug message with structured context.
    fn debug(&self, message: &str, fields: Value);

    /// Log an info message with structured context.
    fn info(&self, message: &str, fields: Value);

    /// Log a warning message with structured context.
    fn warn(&self, message: &str, fields: Value);

    /// Log an error message with structured context.
    fn error(&self, message: &str, fields: Value);
}

/// Structured logger emitting `tracing` events.
///
/// Credential-bearing fields are redacted before the event is emitted.
pub struct StructuredLogger {
    name: String,
    level: LogLevel,
}

impl StructuredLogger {
    /// Create a new structured logger with the given name.
    ///
    /// # Example
    /// ```
    /// use integrations_vertexai::observability::StructuredLogger;
    ///
    /// let logger = StructuredLogger::new("vertexai.content");
    /// ```
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            level: LogLevel::Info,
        }
    }

    /// Set the minimum log level for this logger.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    fn should_log(&self, level: LogLevel) -> bool {
        level.severity() <= self.level.severity()
    }

    fn redact_sensitive_fields(&self, mut fields: Value) -> Value {
        if let Some(obj) = fields.as_object_mut() {
            for key in SENSITIVE_KEYS {
                if obj.contains_key(key) {
                    obj.insert(key.to_string(), Value::String(REDACTED.to_string()));
                }
            }

            for (_, value) in obj.iter_mut() {
                if value.is_object() {
                    *value = self.redact_sensitive_fields(value.take());
                }
            }
        }

        fields
    }
}

impl Logger for StructuredLogger {
    fn debug(&self, message: &str, fields: Value) {
        if !self.should_log(LogLevel::Debug) {
            return;
        }

        let fields = self.redact_sensitive_fields(fields);
        tracing::debug!(logger = %self.name, fields = %fields, "{}", message);
    }

    fn info(&self, message: &str, fields: Value) {
        if !self.should_log(LogLevel::Info) {
            return;
        }

        let fields = self.redact_sensitive_fields(fields);
        tracing::info!(logger = %self.name, fields = %fields, "{}", message);
    }

    fn warn(&self, message: &str, fields: Value) {
        if !self.should_log(LogLevel::Warn) {
            return;
        }

        let fields = self.redact_sensitive_fields(fields);
        tracing::warn!(logger = %self.name, fields = %fields, "{}", message);
    }

    fn error(&self, message: &str, fields: Value) {
        if !self.should_log(LogLevel::Error) {
            return;
        }

        let fields = self.redact_sensitive_fields(fields);
        tracing::error!(logger = %self.name, fields = %fields, "{}", message);
    }
}

/// Logger that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn debug(&self, _message: &str, _fields: Value) {}
    fn info(&self, _message: &str, _fields: Value) {}
    fn warn(&self, _message: &str, _fields: Value) {}
    fn error(&self, _message: &str, _fields: Value) {}
}
