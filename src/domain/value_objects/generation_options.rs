//! Generation preferences supplied with every outline/prose request

use serde::{Deserialize, Serialize};

/// Words per minute used for reading-time estimates
pub const WORDS_PER_MINUTE: u32 = 200;

/// Preferences controlling how an outline is drafted into prose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Try an external text-generation provider before the rule-based path
    pub use_ai: bool,
    /// Creativity scalar in [0, 1]; reserved, not read by the rule-based path
    pub creativity: f32,
    pub length: StoryLength,
    pub include_dialogue: bool,
    pub narrative_perspective: NarrativePerspective,
    pub tense: Tense,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            use_ai: false,
            creativity: 0.7,
            length: StoryLength::Medium,
            include_dialogue: true,
            narrative_perspective: NarrativePerspective::ThirdLimited,
            tense: Tense::Past,
        }
    }
}

#[cfg(test)]
impl GenerationOptions {
    pub fn with_ai(mut self, use_ai: bool) -> Self {
        self.use_ai = use_ai;
        self
    }

    pub fn with_creativity(mut self, creativity: f32) -> Self {
        self.creativity = creativity.clamp(0.0, 1.0);
        self
    }

    pub fn with_length(mut self, length: StoryLength) -> Self {
        self.length = length;
        self
    }

    pub fn with_dialogue(mut self, include_dialogue: bool) -> Self {
        self.include_dialogue = include_dialogue;
        self
    }

    pub fn with_perspective(mut self, perspective: NarrativePerspective) -> Self {
        self.narrative_perspective = perspective;
        self
    }

    pub fn with_tense(mut self, tense: Tense) -> Self {
        self.tense = tense;
        self
    }
}

/// Length class of the finished story
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryLength {
    Short,
    Medium,
    Long,
}

impl StoryLength {
    /// Target word count for the whole story
    pub fn target_word_count(&self) -> u32 {
        match self {
            Self::Short => 2000,
            Self::Medium => 5000,
            Self::Long => 10000,
        }
    }

    /// Estimated reading time of the whole story in minutes
    pub fn reading_time_minutes(&self) -> u32 {
        self.target_word_count().div_ceil(WORDS_PER_MINUTE)
    }

    /// Target word count for a single externally generated chapter
    pub fn chapter_word_target(&self) -> u32 {
        match self {
            Self::Short => 300,
            Self::Medium => 600,
            Self::Long => 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NarrativePerspective {
    First,
    Second,
    ThirdLimited,
    ThirdOmniscient,
}

impl NarrativePerspective {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::ThirdLimited => "third-limited",
            Self::ThirdOmniscient => "third-omniscient",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Past,
    Present,
    Future,
}

impl Tense {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Past => "past",
            Self::Present => "present",
            Self::Future => "future",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_class_mapping_is_exact() {
        assert_eq!(StoryLength::Short.target_word_count(), 2000);
        assert_eq!(StoryLength::Short.reading_time_minutes(), 10);
        assert_eq!(StoryLength::Medium.target_word_count(), 5000);
        assert_eq!(StoryLength::Medium.reading_time_minutes(), 25);
        assert_eq!(StoryLength::Long.target_word_count(), 10000);
        assert_eq!(StoryLength::Long.reading_time_minutes(), 50);
    }

    #[test]
    fn test_chapter_word_targets() {
        assert_eq!(StoryLength::Short.chapter_word_target(), 300);
        assert_eq!(StoryLength::Medium.chapter_word_target(), 600);
        assert_eq!(StoryLength::Long.chapter_word_target(), 1000);
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: GenerationOptions =
            serde_json::from_str(r#"{"narrative_perspective": "first", "length": "long"}"#)
                .unwrap();

        assert_eq!(options.narrative_perspective, NarrativePerspective::First);
        assert_eq!(options.length, StoryLength::Long);
        assert!(options.include_dialogue);
        assert!(!options.use_ai);
    }

    #[test]
    fn test_creativity_is_clamped() {
        let options = GenerationOptions::default().with_creativity(3.5);
        assert_eq!(options.creativity, 1.0);
    }
}
