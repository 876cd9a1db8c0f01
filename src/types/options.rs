//! Per-call transport options.

use std::time::Duration;

/// Transport-level tuning for a single call.
///
/// # Example
///
/// ```
/// use integrations_vertexai::types::RequestOptions;
///
/// let options = RequestOptions::new()
///     .timeout_ms(5_000)
///     .api_client("my-app/1.2.0")
///     .header("X-Request-Tag", "batch-7");
/// assert_eq!(options.timeout_duration(), Some(std::time::Duration::from_millis(5_000)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Timeout in milliseconds. Negative values are ignored.
    pub timeout: Option<i64>,
    /// Client identifier appended to the `X-Goog-Api-Client` header.
    pub api_client: Option<String>,
    /// Additional headers, in insertion order. Duplicate names accumulate.
    pub custom_headers: Option<Vec<(String, String)>>,
}

impl RequestOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timeout in milliseconds.
    pub fn timeout_ms(mut self, timeout: i64) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the client identifier.
    pub fn api_client(mut self, api_client: impl Into<String>) -> Self {
        self.api_client = Some(api_client.into());
        self
    }

    /// Adds a custom header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers
            .get_or_insert_with(Vec::new)
            .push((name.into(), value.into()));
        self
    }

    /// Returns the effective timeout, or `None` when absent or negative.
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout
            .and_then(|ms| u64::try_from(ms).ok())
            .map(Duration::from_millis)
    }
}
