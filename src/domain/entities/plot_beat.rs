//! Plot beat entity - one unit of plot progression within an outline

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{BeatType, CharacterId, PlotBeatId, SettingId};

/// A plot beat. `order` is 1-based and global to the outline; `act` is
/// 1-based and non-decreasing with `order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotBeat {
    pub id: PlotBeatId,
    pub title: String,
    pub description: String,
    pub act: u32,
    pub order: u32,
    #[serde(rename = "type")]
    pub beat_type: BeatType,
    /// Participating characters, protagonist first
    pub characters: Vec<CharacterId>,
    pub setting: Option<SettingId>,
}

impl PlotBeat {
    pub fn new(
        beat_type: BeatType,
        act: u32,
        order: u32,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: PlotBeatId::new(),
            title: title.into(),
            description: description.into(),
            act,
            order,
            beat_type,
            characters: Vec::new(),
            setting: None,
        }
    }

    pub fn with_characters(mut self, characters: Vec<CharacterId>) -> Self {
        self.characters = characters;
        self
    }

    pub fn with_setting(mut self, setting: SettingId) -> Self {
        self.setting = Some(setting);
        self
    }

    pub fn involves(&self, character: CharacterId) -> bool {
        self.characters.contains(&character)
    }
}
