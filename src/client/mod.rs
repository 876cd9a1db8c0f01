//! Client entry point for the Vertex AI API.

use std::sync::Arc;

use crate::config::VertexConfig;
use crate::error::{ConfigurationError, VertexError};
use crate::services::ContentServiceImpl;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Vertex AI client.
///
/// Holds configuration and a shared transport, and hands out per-model
/// content services.
///
/// # Example
///
/// ```no_run
/// use integrations_vertexai::{VertexClient, VertexConfig};
/// use secrecy::SecretString;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = VertexConfig::builder()
///     .project("my-project")
///     .location("us-central1")
///     .access_token(SecretString::new("ya29.token".into()))
///     .build()?;
///
/// let client = VertexClient::new(config)?;
/// let model = client.generative_model("gemini-1.5-pro");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct VertexClient {
    config: Arc<VertexConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl VertexClient {
    /// Creates a client using the reqwest transport.
    pub fn new(config: VertexConfig) -> Result<Self, VertexError> {
        let transport = ReqwestTransport::new(config.connect_timeout).map_err(|e| {
            VertexError::Configuration(ConfigurationError::InvalidConfiguration {
                message: e.to_string(),
            })
        })?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client from environment variables.
    pub fn from_env() -> Result<Self, VertexError> {
        Self::new(VertexConfig::from_env()?)
    }

    /// Creates a client with a custom transport.
    pub fn with_transport(config: VertexConfig, transport: Arc<dyn HttpTransport>) -> Self {
        tracing::debug!(
            project = %config.project,
            location = %config.location,
            api_endpoint = ?config.api_endpoint,
            "Creating Vertex AI client"
        );
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &VertexConfig {
        &self.config
    }

    /// Returns a content service for `model`.
    pub fn generative_model(&self, model: impl Into<String>) -> ContentServiceImpl {
        ContentServiceImpl::new(self.config.clone(), self.transport.clone(), model)
    }
}
