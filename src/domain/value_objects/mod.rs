//! Value objects - Immutable objects defined by their attributes

mod ai_provider;
mod generation_options;
mod ids;
mod story_tags;

pub use ai_provider::AiProviderConfig;
pub use generation_options::{GenerationOptions, NarrativePerspective, WORDS_PER_MINUTE};
pub use ids::*;
pub use story_tags::{
    BeatType, CharacterRole, ConflictType, Genre, Mood, PersonalityTrait, Season, SettingType,
    StoryStructure, ThemeTag, TimeOfDay,
};

#[cfg(test)]
pub use generation_options::StoryLength;
