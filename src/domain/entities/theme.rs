//! Theme entity - the thematic spine of a story

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ConflictType, Mood, ThemeId, ThemeTag};

/// A selected theme. Only the primary tag drives conflict lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub id: ThemeId,
    pub primary: ThemeTag,
    #[serde(default)]
    pub secondary: Vec<ThemeTag>,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_conflict_type")]
    pub conflict_type: ConflictType,
    #[serde(default = "default_mood")]
    pub mood: Mood,
}

fn default_conflict_type() -> ConflictType {
    ConflictType::Both
}

fn default_mood() -> Mood {
    Mood::Neutral
}

impl Theme {
    #[cfg(test)]
    pub fn new(primary: ThemeTag) -> Self {
        Self {
            id: ThemeId::new(),
            primary,
            secondary: Vec::new(),
            description: String::new(),
            conflict_type: default_conflict_type(),
            mood: default_mood(),
        }
    }

    #[cfg(test)]
    pub fn with_secondary(mut self, tag: ThemeTag) -> Self {
        self.secondary.push(tag);
        self
    }

    #[cfg(test)]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[cfg(test)]
    pub fn with_conflict_type(mut self, conflict_type: ConflictType) -> Self {
        self.conflict_type = conflict_type;
        self
    }

    #[cfg(test)]
    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }
}
