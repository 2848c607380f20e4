//! Text generation provider clients
//!
//! One client per wire protocol, dispatched through [`ProviderClient`]:
//! - OpenAI-style chat completions (bearer auth)
//! - Anthropic-style messages (API key + version headers)
//! - Local Ollama-style `/api/generate`

mod anthropic;
mod local;
mod openai;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::application::ports::outbound::{
    ProviderError, TextGenerationPort, TextGenerationProviderFactory,
};
use crate::domain::value_objects::AiProviderConfig;

pub use anthropic::AnthropicClient;
pub use local::LocalModelClient;
pub use openai::OpenAiClient;

/// Sampling temperature shared by every provider
const TEMPERATURE: f32 = 0.8;
/// Completion budget for remote providers
const MAX_TOKENS: u32 = 2000;

/// A configured provider client
pub enum ProviderClient {
    OpenAi(OpenAiClient),
    Anthropic(AnthropicClient),
    Local(LocalModelClient),
}

impl ProviderClient {
    pub fn from_config(config: &AiProviderConfig, timeout: Duration) -> Result<Self, ProviderError> {
        let client = http_client(timeout)?;
        let provider = match config {
            AiProviderConfig::OpenAi { api_key, model } => {
                let api_key = required_key(config.provider_name(), api_key.as_deref())?;
                Self::OpenAi(OpenAiClient::new(client, api_key, model.as_deref()))
            }
            AiProviderConfig::Anthropic { api_key, model } => {
                let api_key = required_key(config.provider_name(), api_key.as_deref())?;
                Self::Anthropic(AnthropicClient::new(client, api_key, model.as_deref()))
            }
            AiProviderConfig::Local { model, base_url } => Self::Local(LocalModelClient::new(
                client,
                base_url.as_deref(),
                model.as_deref(),
            )),
        };
        Ok(provider)
    }
}

#[async_trait]
impl TextGenerationPort for ProviderClient {
    fn provider_name(&self) -> &'static str {
        match self {
            Self::OpenAi(_) => "openai",
            Self::Anthropic(_) => "anthropic",
            Self::Local(_) => "local",
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        match self {
            Self::OpenAi(client) => client.generate(prompt).await,
            Self::Anthropic(client) => client.generate(prompt).await,
            Self::Local(client) => client.generate(prompt).await,
        }
    }
}

/// Builds reqwest-backed provider clients
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpProviderFactory;

impl TextGenerationProviderFactory for HttpProviderFactory {
    fn create(
        &self,
        config: &AiProviderConfig,
        timeout: Duration,
    ) -> Result<Arc<dyn TextGenerationPort>, ProviderError> {
        Ok(Arc::new(ProviderClient::from_config(config, timeout)?))
    }
}

fn http_client(timeout: Duration) -> Result<Client, ProviderError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(transport)
}

fn required_key(provider: &'static str, api_key: Option<&str>) -> Result<String, ProviderError> {
    api_key
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .ok_or(ProviderError::MissingCredential(provider))
}

fn transport(e: reqwest::Error) -> ProviderError {
    ProviderError::Transport(e.to_string())
}

/// Pass successful responses through, turn anything else into a status error
async fn ensure_success(provider: &'static str, response: Response) -> Result<Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ProviderError::Status {
        provider,
        status: status.as_u16(),
        body,
    })
}

/// Reject missing or blank text
fn non_empty(provider: &'static str, text: Option<String>) -> Result<String, ProviderError> {
    text.filter(|t| !t.trim().is_empty())
        .ok_or(ProviderError::EmptyResponse(provider))
}

#[cfg(test)]
pub(crate) mod test_server {
    use axum::Router;

    /// Serve a router on an ephemeral local port and return its base URL
    pub async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }
}
