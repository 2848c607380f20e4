//! SQLite story storage
//!
//! Each story is stored as a JSON document keyed by id, with the timestamps
//! pulled out into columns for ordering.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::application::ports::outbound::StoryRepositoryPort;
use crate::domain::entities::Story;
use crate::domain::value_objects::StoryId;

pub struct SqliteStoryRepository {
    pool: SqlitePool,
}

impl SqliteStoryRepository {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS stories (
                id TEXT PRIMARY KEY,
                body TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }
}

fn decode(id: &str, body: &str) -> Result<Story> {
    serde_json::from_str(body).with_context(|| format!("Corrupt story record {}", id))
}

#[async_trait]
impl StoryRepositoryPort for SqliteStoryRepository {
    async fn save(&self, story: &Story) -> Result<()> {
        let body = serde_json::to_string(story)?;
        sqlx::query(
            "INSERT OR REPLACE INTO stories (id, body, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(story.id.to_string())
        .bind(body)
        .bind(story.created_at)
        .bind(story.updated_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!(story_id = %story.id, "Saved story");
        Ok(())
    }

    async fn get(&self, id: StoryId) -> Result<Option<Story>> {
        let key = id.to_string();
        let row: Option<(String,)> = sqlx::query_as("SELECT body FROM stories WHERE id = ?")
            .bind(&key)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|(body,)| decode(&key, &body)).transpose()
    }

    async fn list(&self) -> Result<Vec<Story>> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT id, body FROM stories ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        rows.iter().map(|(id, body)| decode(id, body)).collect()
    }

    async fn delete(&self, id: StoryId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM stories WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
