//! Story repository port - durable storage for generated stories

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::Story;
use crate::domain::value_objects::StoryId;

#[async_trait]
pub trait StoryRepositoryPort: Send + Sync {
    /// Insert or replace a story
    async fn save(&self, story: &Story) -> Result<()>;

    async fn get(&self, id: StoryId) -> Result<Option<Story>>;

    /// All stories, newest first
    async fn list(&self) -> Result<Vec<Story>>;

    /// Returns false when no story had this id
    async fn delete(&self, id: StoryId) -> Result<bool>;
}
