//! Local completion endpoint client (Ollama `/api/generate`)

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ensure_success, non_empty, transport, TEMPERATURE};
use crate::application::ports::outbound::ProviderError;

const PROVIDER: &str = "local";
const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_MODEL: &str = "llama2";
const TOP_P: f32 = 0.9;

pub struct LocalModelClient {
    client: Client,
    base_url: String,
    model: String,
}

impl LocalModelClient {
    pub fn new(client: Client, base_url: Option<&str>, model: Option<&str>) -> Self {
        Self {
            client,
            base_url: base_url
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            model: model.unwrap_or(DEFAULT_MODEL).to_string(),
        }
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: SamplingOptions {
                temperature: TEMPERATURE,
                top_p: TOP_P,
            },
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(transport)?;
        let response = ensure_success(PROVIDER, response).await?;

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;
        non_empty(PROVIDER, body.response)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: SamplingOptions,
}

#[derive(Debug, Serialize)]
struct SamplingOptions {
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}
