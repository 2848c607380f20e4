//! SQLite persistence adapters
//!
//! Stories and the user's AI provider settings share one database.

mod ai_settings_repository;
mod story_repository;

pub use ai_settings_repository::SqliteAiSettingsRepository;
pub use story_repository::SqliteStoryRepository;
