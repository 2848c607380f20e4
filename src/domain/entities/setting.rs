//! Setting entity - where a story takes place

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Genre, Season, SettingId, SettingType, TimeOfDay};

/// A place a story's beats are bound to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    #[serde(default)]
    pub id: SettingId,
    pub name: String,
    pub genre: Genre,
    #[serde(rename = "type")]
    pub setting_type: SettingType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub atmosphere: String,
    #[serde(default)]
    pub key_locations: Vec<String>,
    #[serde(default)]
    pub time_of_day: Option<TimeOfDay>,
    #[serde(default)]
    pub weather: Option<String>,
    #[serde(default)]
    pub season: Option<Season>,
}

impl Setting {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, genre: Genre, setting_type: SettingType) -> Self {
        Self {
            id: SettingId::new(),
            name: name.into(),
            genre,
            setting_type,
            description: String::new(),
            atmosphere: String::new(),
            key_locations: Vec::new(),
            time_of_day: None,
            weather: None,
            season: None,
        }
    }

    #[cfg(test)]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[cfg(test)]
    pub fn with_atmosphere(mut self, atmosphere: impl Into<String>) -> Self {
        self.atmosphere = atmosphere.into();
        self
    }

    #[cfg(test)]
    pub fn with_key_location(mut self, location: impl Into<String>) -> Self {
        self.key_locations.push(location.into());
        self
    }

    #[cfg(test)]
    pub fn with_time_of_day(mut self, time_of_day: TimeOfDay) -> Self {
        self.time_of_day = Some(time_of_day);
        self
    }

    #[cfg(test)]
    pub fn with_weather(mut self, weather: impl Into<String>) -> Self {
        self.weather = Some(weather.into());
        self
    }

    #[cfg(test)]
    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }
}
