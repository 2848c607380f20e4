//! Story entity - a drafted outline with its assembled prose

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StoryOutline;
use crate::domain::value_objects::{ChapterId, PlotBeatId, StoryId, WORDS_PER_MINUTE};

/// A generated story: the frozen outline plus the drafted document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub outline: StoryOutline,
    /// The whole document: title, summary, then one block per chapter
    pub content: String,
    /// False when drafting stopped before every beat was written
    pub is_complete: bool,
    pub chapters: Vec<Chapter>,
    pub metadata: StoryMetadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One drafted chapter, generated from a single plot beat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: ChapterId,
    pub title: String,
    pub content: String,
    pub order: u32,
    pub word_count: u32,
    pub plot_points: Vec<PlotBeatId>,
    /// Whether the prose came from an external provider
    pub ai_generated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryMetadata {
    pub word_count: u32,
    pub reading_time: u32,
    pub last_edited_at: DateTime<Utc>,
    pub version: u32,
    pub tags: Vec<String>,
}

impl Chapter {
    pub fn new(order: u32, title: impl Into<String>, content: String, beat: PlotBeatId) -> Self {
        let word_count = count_words(&content);
        Self {
            id: ChapterId::new(),
            title: title.into(),
            content,
            order,
            word_count,
            plot_points: vec![beat],
            ai_generated: false,
        }
    }

    pub fn ai_generated(mut self) -> Self {
        self.ai_generated = true;
        self
    }
}

impl Story {
    pub fn new(outline: StoryOutline, content: String, chapters: Vec<Chapter>, is_complete: bool) -> Self {
        let now = Utc::now();
        let word_count = count_words(&content);
        let tags = outline.themes.iter().map(|t| t.to_string()).collect();
        Self {
            id: StoryId::new(),
            outline,
            content,
            is_complete,
            chapters,
            metadata: StoryMetadata {
                word_count,
                reading_time: word_count.div_ceil(WORDS_PER_MINUTE),
                last_edited_at: now,
                version: 1,
                tags,
            },
            created_at: now,
            updated_at: now,
        }
    }
}

/// Whitespace-delimited word count
pub fn count_words(text: &str) -> u32 {
    text.split_whitespace().count() as u32
}
