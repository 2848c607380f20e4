use async_trait::async_trait;

use crate::domain::value_objects::AiProviderConfig;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Persisted provider configuration chosen by the user
#[async_trait]
pub trait AiSettingsRepositoryPort: Send + Sync {
    /// `None` when nothing has been saved
    async fn get(&self) -> Result<Option<AiProviderConfig>, SettingsError>;
    async fn save(&self, config: &AiProviderConfig) -> Result<(), SettingsError>;
    /// Clear persisted values
    async fn reset(&self) -> Result<(), SettingsError>;
}
