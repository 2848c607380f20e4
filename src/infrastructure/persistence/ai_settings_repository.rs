use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::application::ports::outbound::{AiSettingsRepositoryPort, SettingsError};
use crate::domain::value_objects::AiProviderConfig;

/// Provider settings stored as key/value rows
pub struct SqliteAiSettingsRepository {
    pool: SqlitePool,
}

impl SqliteAiSettingsRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS ai_settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }
}

fn database(e: sqlx::Error) -> SettingsError {
    SettingsError::Database(e.to_string())
}

#[async_trait]
impl AiSettingsRepositoryPort for SqliteAiSettingsRepository {
    async fn get(&self) -> Result<Option<AiProviderConfig>, SettingsError> {
        let rows: Vec<(String, String)> = sqlx::query_as("SELECT key, value FROM ai_settings")
            .fetch_all(&self.pool)
            .await
            .map_err(database)?;

        let mut provider = None;
        let mut api_key = None;
        let mut model = None;
        let mut base_url = None;
        for (key, value) in rows {
            match key.as_str() {
                "provider" => provider = Some(value),
                "api_key" => api_key = Some(value),
                "model" => model = Some(value),
                "base_url" => base_url = Some(value),
                _ => {}
            }
        }

        let Some(provider) = provider else {
            return Ok(None);
        };
        AiProviderConfig::from_parts(&provider, api_key, model, base_url)
            .map(Some)
            .ok_or_else(|| SettingsError::Serialization(format!("unknown provider '{}'", provider)))
    }

    async fn save(&self, config: &AiProviderConfig) -> Result<(), SettingsError> {
        let base_url = match config {
            AiProviderConfig::Local { base_url, .. } => base_url.as_deref(),
            _ => None,
        };
        let pairs = [
            ("provider", Some(config.provider_name())),
            ("api_key", config.api_key()),
            ("model", config.model()),
            ("base_url", base_url),
        ];

        let mut tx = self.pool.begin().await.map_err(database)?;
        sqlx::query("DELETE FROM ai_settings")
            .execute(&mut *tx)
            .await
            .map_err(database)?;
        for (key, value) in pairs {
            let Some(value) = value else { continue };
            sqlx::query(
                "INSERT OR REPLACE INTO ai_settings (key, value, updated_at) VALUES (?, ?, CURRENT_TIMESTAMP)",
            )
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await
            .map_err(database)?;
        }
        tx.commit().await.map_err(database)?;

        Ok(())
    }

    async fn reset(&self) -> Result<(), SettingsError> {
        sqlx::query("DELETE FROM ai_settings")
            .execute(&self.pool)
            .await
            .map_err(database)?;
        Ok(())
    }
}
