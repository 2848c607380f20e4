//! Prompt construction for external text generation

mod story_prompt_builder;

pub use story_prompt_builder::{build_chapter_prompt, SYSTEM_PROMPT};
