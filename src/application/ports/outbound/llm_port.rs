//! Text generation port - the capability every external provider offers

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::value_objects::AiProviderConfig;

/// Failures raised by a text generation provider
///
/// None of these escape the delegation facade; they are logged and the
/// caller falls back to rule-based prose.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{0} API key not provided")]
    MissingCredential(&'static str),
    #[error("{provider} API error: {status} {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },
    #[error("{0} returned an empty response")]
    EmptyResponse(&'static str),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
    #[error("Provider did not answer within {0:?}")]
    Timeout(Duration),
}

/// Generate text for a single prompt
#[async_trait]
pub trait TextGenerationPort: Send + Sync {
    /// Provider tag, for logging
    fn provider_name(&self) -> &'static str;

    /// Issue exactly one request for the prompt; no retries
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Builds a provider client from a resolved configuration
pub trait TextGenerationProviderFactory: Send + Sync {
    fn create(
        &self,
        config: &AiProviderConfig,
        timeout: Duration,
    ) -> Result<Arc<dyn TextGenerationPort>, ProviderError>;
}
