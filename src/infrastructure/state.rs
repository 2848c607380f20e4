//! Shared application state

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::application::services::{
    cancellation_pair, AiSettingsService, CancellationHandle, StoryGenerationService,
};
use crate::infrastructure::ai_providers::HttpProviderFactory;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::{SqliteAiSettingsRepository, SqliteStoryRepository};

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub story_service: Arc<StoryGenerationService>,
    pub ai_settings_service: Arc<AiSettingsService>,
    /// Cancelled on shutdown so in-flight generations stop at a chapter boundary
    pub shutdown: CancellationHandle,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&config.database_url)
            .await
            .with_context(|| format!("Failed to open database {}", config.database_url))?;

        Self::with_pool(config, pool).await
    }

    /// Wire services on top of an open pool
    pub async fn with_pool(config: AppConfig, pool: SqlitePool) -> Result<Self> {
        let stories = SqliteStoryRepository::new(pool.clone())
            .await
            .context("Failed to prepare stories table")?;
        let ai_settings = SqliteAiSettingsRepository::new(pool)
            .await
            .context("Failed to prepare ai_settings table")?;

        let ai_settings_service = Arc::new(AiSettingsService::new(
            Arc::new(ai_settings),
            config.ai_provider.clone(),
        ));
        let story_service = Arc::new(StoryGenerationService::new(
            Arc::new(stories),
            ai_settings_service.clone(),
            Arc::new(HttpProviderFactory),
            config.ai_timeout,
        ));

        let (shutdown, _) = cancellation_pair();

        Ok(Self {
            config,
            story_service,
            ai_settings_service,
            shutdown,
        })
    }
}
