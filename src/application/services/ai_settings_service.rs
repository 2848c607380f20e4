//! Persisted AI provider settings with an in-memory cache

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::application::ports::outbound::{AiSettingsRepositoryPort, SettingsError};
use crate::domain::value_objects::AiProviderConfig;

pub struct AiSettingsService {
    repository: Arc<dyn AiSettingsRepositoryPort>,
    /// Provider configuration from the environment, used when nothing usable is persisted
    env_config: Option<AiProviderConfig>,
    cache: RwLock<Option<Option<AiProviderConfig>>>,
}

impl AiSettingsService {
    pub fn new(
        repository: Arc<dyn AiSettingsRepositoryPort>,
        env_config: Option<AiProviderConfig>,
    ) -> Self {
        Self {
            repository,
            env_config,
            cache: RwLock::new(None),
        }
    }

    /// Persisted settings (cached)
    pub async fn get(&self) -> Option<AiProviderConfig> {
        let cache = self.cache.read().await;
        if let Some(settings) = &*cache {
            return settings.clone();
        }
        drop(cache);

        match self.repository.get().await {
            Ok(settings) => {
                *self.cache.write().await = Some(settings.clone());
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to load AI settings: {}", e);
                None
            }
        }
    }

    /// Save settings and refresh the cache
    pub async fn update(&self, config: AiProviderConfig) -> Result<(), SettingsError> {
        self.repository.save(&config).await?;
        *self.cache.write().await = Some(Some(config));
        Ok(())
    }

    /// Clear persisted settings; the environment configuration applies again
    pub async fn reset(&self) -> Result<Option<AiProviderConfig>, SettingsError> {
        self.repository.reset().await?;
        *self.cache.write().await = Some(None);
        Ok(self.env_config.clone())
    }

    /// Configuration to hand to the delegation facade
    ///
    /// Persisted settings win when they are configured, then the environment.
    pub async fn resolve(&self) -> Option<AiProviderConfig> {
        if let Some(persisted) = self.get().await.filter(AiProviderConfig::is_configured) {
            return Some(persisted);
        }
        self.env_config
            .clone()
            .filter(AiProviderConfig::is_configured)
    }
}
