//! External text-generation provider configuration
//!
//! The configuration is resolved by the orchestrator (persisted user settings
//! first, then environment) and handed to the delegation facade explicitly.
//! Serialized with an internal `provider` tag so the JSON shape matches the
//! `{provider, api_key?, model?, base_url?}` record the frontend stores.

use serde::{Deserialize, Serialize};

/// Provider configuration, one variant per supported wire protocol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum AiProviderConfig {
    /// OpenAI-compatible chat completions endpoint
    OpenAi {
        #[serde(default)]
        api_key: Option<String>,
        #[serde(default)]
        model: Option<String>,
    },
    /// Anthropic-compatible messages endpoint
    Anthropic {
        #[serde(default)]
        api_key: Option<String>,
        #[serde(default)]
        model: Option<String>,
    },
    /// Local HTTP completion endpoint (Ollama style)
    Local {
        #[serde(default)]
        model: Option<String>,
        #[serde(default)]
        base_url: Option<String>,
    },
}

impl AiProviderConfig {
    /// Provider tag as stored in settings
    pub fn provider_name(&self) -> &'static str {
        match self {
            Self::OpenAi { .. } => "openai",
            Self::Anthropic { .. } => "anthropic",
            Self::Local { .. } => "local",
        }
    }

    /// A provider is usable when it is local or carries a non-empty key
    pub fn is_configured(&self) -> bool {
        match self {
            Self::OpenAi { api_key, .. } | Self::Anthropic { api_key, .. } => api_key
                .as_deref()
                .map(|key| !key.trim().is_empty())
                .unwrap_or(false),
            Self::Local { .. } => true,
        }
    }

    pub fn api_key(&self) -> Option<&str> {
        match self {
            Self::OpenAi { api_key, .. } | Self::Anthropic { api_key, .. } => api_key.as_deref(),
            Self::Local { .. } => None,
        }
    }

    pub fn model(&self) -> Option<&str> {
        match self {
            Self::OpenAi { model, .. } | Self::Anthropic { model, .. } | Self::Local { model, .. } => {
                model.as_deref()
            }
        }
    }

    /// Build a configuration from loose settings fields
    ///
    /// Returns `None` for an unknown provider tag. The base URL is only kept
    /// for the local provider.
    pub fn from_parts(
        provider: &str,
        api_key: Option<String>,
        model: Option<String>,
        base_url: Option<String>,
    ) -> Option<Self> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        match provider.trim().to_lowercase().as_str() {
            "openai" => Some(Self::OpenAi {
                api_key: non_empty(api_key),
                model: non_empty(model),
            }),
            "anthropic" => Some(Self::Anthropic {
                api_key: non_empty(api_key),
                model: non_empty(model),
            }),
            "local" => Some(Self::Local {
                model: non_empty(model),
                base_url: non_empty(base_url),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_provider_without_credential_is_configured() {
        let config = AiProviderConfig::Local {
            model: None,
            base_url: None,
        };
        assert!(config.is_configured());
    }

    #[test]
    fn test_remote_providers_with_empty_credential_are_not_configured() {
        let openai = AiProviderConfig::OpenAi {
            api_key: Some(String::new()),
            model: None,
        };
        let anthropic = AiProviderConfig::Anthropic {
            api_key: None,
            model: Some("claude-3-sonnet-20240229".to_string()),
        };

        assert!(!openai.is_configured());
        assert!(!anthropic.is_configured());
    }

    #[test]
    fn test_remote_provider_with_credential_is_configured() {
        let config = AiProviderConfig::OpenAi {
            api_key: Some("sk-test".to_string()),
            model: None,
        };
        assert!(config.is_configured());
    }

    #[test]
    fn test_serializes_with_provider_tag() {
        let json = r#"{"provider": "local", "base_url": "http://localhost:11434"}"#;
        let config: AiProviderConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.provider_name(), "local");
        assert_eq!(
            config,
            AiProviderConfig::Local {
                model: None,
                base_url: Some("http://localhost:11434".to_string()),
            }
        );
    }

    #[test]
    fn test_from_parts_drops_blank_values() {
        let config =
            AiProviderConfig::from_parts("OpenAI", Some("  ".to_string()), None, None).unwrap();
        assert_eq!(config.api_key(), None);
        assert!(AiProviderConfig::from_parts("gemini", None, None, None).is_none());
    }
}
