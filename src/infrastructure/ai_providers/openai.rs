//! OpenAI-compatible chat completions client

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ensure_success, non_empty, transport, MAX_TOKENS, TEMPERATURE};
use crate::application::ports::outbound::ProviderError;
use crate::application::services::llm::SYSTEM_PROMPT;

const PROVIDER: &str = "openai";
const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4";

pub struct OpenAiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(client: Client, api_key: String, model: Option<&str>) -> Self {
        Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key,
            model: model.unwrap_or(DEFAULT_MODEL).to_string(),
        }
    }

    /// Point at a different chat completions URL
    #[cfg(test)]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(transport)?;
        let response = ensure_success(PROVIDER, response).await?;

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content);
        non_empty(PROVIDER, content)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ai_providers::test_server::serve;
    use axum::{http::HeaderMap, routing::post, Json, Router};
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_sends_system_and_user_messages_with_bearer_auth() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let auth = headers.get("authorization").and_then(|v| v.to_str().ok()).unwrap_or("");
                assert_eq!(auth, "Bearer sk-test");
                assert_eq!(body["model"], "gpt-4");
                assert_eq!(body["messages"][0]["role"], "system");
                assert_eq!(body["messages"][1]["content"], "Write it");
                assert_eq!(body["max_tokens"], 2000);
                Json(json!({"choices": [{"message": {"role": "assistant", "content": "Once upon a time"}}]}))
            }),
        );
        let base = serve(router).await;

        let client = OpenAiClient::new(Client::new(), "sk-test".to_string(), None)
            .with_endpoint(format!("{}/v1/chat/completions", base));
        assert_eq!(client.generate("Write it").await.unwrap(), "Once upon a time");
    }

    #[tokio::test]
    async fn test_empty_choices_are_an_error() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(json!({"choices": []})) }),
        );
        let base = serve(router).await;

        let client = OpenAiClient::new(Client::new(), "sk-test".to_string(), Some("gpt-4o"))
            .with_endpoint(format!("{}/v1/chat/completions", base));
        assert!(matches!(
            client.generate("Write it").await,
            Err(ProviderError::EmptyResponse("openai"))
        ));
    }
}
