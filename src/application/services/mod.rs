//! Application services - Use case implementations
//!
//! Each service depends on outbound ports, never on concrete adapters.

pub mod ai_delegation_service;
pub mod ai_settings_service;
pub mod cancellation;
pub mod llm;
pub mod story_generation_service;

pub use ai_settings_service::AiSettingsService;
pub use cancellation::{cancellation_pair, CancellationHandle};
pub use story_generation_service::{
    pacing_for_outline, DraftedContent, StoryGenerationError, StoryGenerationService,
};
