//! Application configuration

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::domain::value_objects::AiProviderConfig;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server port
    pub server_port: u16,

    /// SQLite connection URL for stories and AI settings
    pub database_url: String,

    /// Provider configured through the environment, if any
    pub ai_provider: Option<AiProviderConfig>,

    /// Upper bound for a single provider request
    pub ai_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let timeout_secs: u64 = var("STORY_AI_TIMEOUT_SECS")
            .unwrap_or_else(|| "60".to_string())
            .parse()
            .context("STORY_AI_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self {
            server_port: var("SERVER_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,

            database_url: var("DATABASE_URL")
                .unwrap_or_else(|| "sqlite:storyweaver.db?mode=rwc".to_string()),

            ai_provider: ai_provider_from(&var)?,

            ai_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Explicit `STORY_AI_*` settings first, then well-known provider keys
fn ai_provider_from(var: &impl Fn(&str) -> Option<String>) -> Result<Option<AiProviderConfig>> {
    if let Some(provider) = var("STORY_AI_PROVIDER") {
        let config = AiProviderConfig::from_parts(
            &provider,
            var("STORY_AI_API_KEY"),
            var("STORY_AI_MODEL"),
            var("STORY_AI_BASE_URL"),
        )
        .with_context(|| format!("STORY_AI_PROVIDER has unknown value '{}'", provider))?;
        return Ok(Some(config));
    }

    if let Some(api_key) = var("OPENAI_API_KEY").filter(|k| !k.trim().is_empty()) {
        return Ok(AiProviderConfig::from_parts(
            "openai",
            Some(api_key),
            var("OPENAI_MODEL"),
            None,
        ));
    }

    if let Some(api_key) = var("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty()) {
        return Ok(AiProviderConfig::from_parts(
            "anthropic",
            Some(api_key),
            var("ANTHROPIC_MODEL"),
            None,
        ));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.database_url, "sqlite:storyweaver.db?mode=rwc");
        assert_eq!(config.ai_provider, None);
        assert_eq!(config.ai_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_explicit_provider_wins() {
        let config = load(&[
            ("STORY_AI_PROVIDER", "local"),
            ("STORY_AI_BASE_URL", "http://gpu-box:11434"),
            ("OPENAI_API_KEY", "sk-ignored"),
        ])
        .unwrap();
        assert_eq!(
            config.ai_provider,
            Some(AiProviderConfig::Local {
                model: None,
                base_url: Some("http://gpu-box:11434".to_string()),
            })
        );
    }

    #[test]
    fn test_openai_then_anthropic_keys() {
        let config = load(&[("ANTHROPIC_API_KEY", "ak"), ("OPENAI_API_KEY", "sk")]).unwrap();
        assert_eq!(config.ai_provider.unwrap().provider_name(), "openai");

        let config = load(&[("ANTHROPIC_API_KEY", "ak"), ("ANTHROPIC_MODEL", "claude-x")]).unwrap();
        assert_eq!(
            config.ai_provider,
            Some(AiProviderConfig::Anthropic {
                api_key: Some("ak".to_string()),
                model: Some("claude-x".to_string()),
            })
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(load(&[("SERVER_PORT", "http")]).is_err());
        assert!(load(&[("STORY_AI_PROVIDER", "cohere")]).is_err());
        assert!(load(&[("STORY_AI_TIMEOUT_SECS", "soon")]).is_err());
    }
}
