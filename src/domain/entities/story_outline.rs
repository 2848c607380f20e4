//! Story outline entity - the structural skeleton of a story
//!
//! An outline carries full snapshots of its characters and settings so that
//! later edits to the source entities do not change an existing outline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::character::find_protagonist;
use super::{Character, PlotBeat, Setting};
use crate::domain::value_objects::{Genre, OutlineId, StoryStructure, ThemeTag};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryOutline {
    pub id: OutlineId,
    pub title: String,
    pub genre: Genre,
    /// Primary tag of every selected theme, in selection order
    pub themes: Vec<ThemeTag>,
    pub structure: StoryStructure,
    pub characters: Vec<Character>,
    pub settings: Vec<Setting>,
    pub plot_points: Vec<PlotBeat>,
    pub summary: String,
    pub word_count_target: u32,
    pub estimated_reading_time: u32,
    pub created_at: DateTime<Utc>,
}

impl StoryOutline {
    pub fn protagonist(&self) -> Option<&Character> {
        find_protagonist(&self.characters)
    }

    /// Characters bound to a beat, in outline order
    pub fn participants(&self, beat: &PlotBeat) -> Vec<&Character> {
        self.characters
            .iter()
            .filter(|c| beat.involves(c.id))
            .collect()
    }

    /// The setting bound to a beat, if it is part of this outline
    pub fn setting_for(&self, beat: &PlotBeat) -> Option<&Setting> {
        let setting_id = beat.setting?;
        self.settings.iter().find(|s| s.id == setting_id)
    }
}
