//! Outbound ports - Interfaces that the application requires from external systems

mod ai_settings_port;
mod llm_port;
mod story_repository_port;

pub use ai_settings_port::{AiSettingsRepositoryPort, SettingsError};
pub use llm_port::{ProviderError, TextGenerationPort, TextGenerationProviderFactory};
pub use story_repository_port::StoryRepositoryPort;
