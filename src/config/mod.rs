//! Configuration types for the Vertex AI client.

use secrecy::SecretString;
use std::time::Duration;
use crate::error::{ConfigurationError, VertexError};
use crate::types::RequestOptions;

/// Default Google Cloud location.
pub const DEFAULT_LOCATION: &str = "us-central1";

/// Default connect timeout (30 seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Log level for the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Error level - only errors.
    Error,
    /// Warning level - errors and warnings.
    Warn,
    /// Info level - general information.
    #[default]
    Info,
    /// Debug level - detailed information.
    Debug,
    /// Trace level - very detailed information.
    Trace,
}

impl LogLevel {
    /// Lower values are more severe.
    pub(crate) fn severity(self) -> u8 {
        match self {
            LogLevel::Error => 0,
            LogLevel::Warn => 1,
            LogLevel::Info => 2,
            LogLevel::Debug => 3,
            LogLevel::Trace => 4,
        }
    }
}

/// Configuration for the Vertex AI client.
#[derive(Clone, Debug)]
pub struct VertexConfig {
    /// Google Cloud project (required).
    pub project: String,
    /// Google Cloud location, also used as the endpoint region.
    pub location: String,
    /// Endpoint host override. When unset, the regional endpoint is used.
    pub api_endpoint: Option<String>,
    /// Bearer token sent with every request.
    pub access_token: Option<SecretString>,
    /// Connect timeout for the HTTP client.
    pub connect_timeout: Duration,
    /// Options applied to calls that do not pass their own.
    pub default_request_options: Option<RequestOptions>,
    /// Log level.
    pub log_level: LogLevel,
}

impl VertexConfig {
    /// Create a new configuration builder.
    pub fn builder() -> VertexConfigBuilder {
        VertexConfigBuilder::default()
    }

    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `GOOGLE_CLOUD_PROJECT` (required)
    /// - `GOOGLE_CLOUD_LOCATION` or `GOOGLE_CLOUD_REGION` (optional)
    /// - `VERTEX_API_ENDPOINT` (optional)
    /// - `VERTEX_ACCESS_TOKEN` (optional)
    /// - `VERTEX_TIMEOUT_MS` (optional, default per-call timeout)
    pub fn from_env() -> Result<Self, VertexError> {
        let project = std::env::var("GOOGLE_CLOUD_PROJECT")
            .map_err(|_| ConfigurationError::MissingProject)?;

        let location = std::env::var("GOOGLE_CLOUD_LOCATION")
            .or_else(|_| std::env::var("GOOGLE_CLOUD_REGION"))
            .unwrap_or_else(|_| DEFAULT_LOCATION.to_string());

        let mut builder = Self::builder().project(project).location(location);

        if let Ok(endpoint) = std::env::var("VERTEX_API_ENDPOINT") {
            builder = builder.api_endpoint(endpoint);
        }

        if let Ok(token) = std::env::var("VERTEX_ACCESS_TOKEN") {
            builder = builder.access_token(SecretString::new(token));
        }

        let timeout_ms: Option<i64> = std::env::var("VERTEX_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok());
        if let Some(timeout_ms) = timeout_ms {
            builder = builder.default_request_options(RequestOptions::new().timeout_ms(timeout_ms));
        }

        builder.build()
    }
}

/// Builder for `VertexConfig`.
#[derive(Default)]
pub struct VertexConfigBuilder {
    project: Option<String>,
    location: Option<String>,
    api_endpoint: Option<String>,
    access_token: Option<SecretString>,
    connect_timeout: Option<Duration>,
    default_request_options: Option<RequestOptions>,
    log_level: Option<LogLevel>,
}

impl VertexConfigBuilder {
    /// Set the project.
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Set the location.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Override the endpoint host.
    pub fn api_endpoint(mut self, api_endpoint: impl Into<String>) -> Self {
        self.api_endpoint = Some(api_endpoint.into());
        self
    }

    /// Set the bearer token.
    pub fn access_token(mut self, token: SecretString) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set options used by calls that do not pass their own.
    pub fn default_request_options(mut self, options: RequestOptions) -> Self {
        self.default_request_options = Some(options);
        self
    }

    /// Set the log level.
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<VertexConfig, VertexError> {
        let project = self.project
            .filter(|p| !p.is_empty())
            .ok_or(ConfigurationError::MissingProject)?;

        let location = self.location.unwrap_or_else(|| DEFAULT_LOCATION.to_string());
        if location.is_empty() {
            return Err(ConfigurationError::InvalidConfiguration {
                message: "location cannot be empty".to_string(),
            }
            .into());
        }

        Ok(VertexConfig {
            project,
            location,
            api_endpoint: self.api_endpoint,
            access_token: self.access_token,
            connect_timeout: self.connect_timeout
                .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)),
            default_request_options: self.default_request_options,
            log_level: self.log_level.unwrap_or_default(),
        })
    }
}
