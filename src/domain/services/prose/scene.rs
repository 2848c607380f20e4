use crate::domain::entities::{Character, Setting};
use crate::domain::value_objects::TimeOfDay;

/// Opening paragraph locating the beat in its setting
pub(super) fn scene_description(setting: &Setting, present: &[&Character]) -> String {
    let mut paragraph = format!("The scene takes place in {}", setting.name);
    if let Some(time) = setting.time_of_day {
        paragraph.push(' ');
        paragraph.push_str(&time_phrase(time));
    }
    paragraph.push('.');

    if let Some(weather) = setting.weather.as_deref().filter(|w| !w.trim().is_empty()) {
        paragraph.push_str(&format!(" The weather is {}.", weather.trim().to_lowercase()));
    }
    if let Some(atmosphere) = sentence(&setting.atmosphere) {
        paragraph.push(' ');
        paragraph.push_str(&atmosphere);
    }
    if let Some(description) = sentence(&setting.description) {
        paragraph.push(' ');
        paragraph.push_str(&description);
    }

    if !present.is_empty() {
        let names: Vec<_> = present.iter().map(|c| c.name.as_str()).collect();
        paragraph.push_str(&format!(" Present in this scene: {}.", names.join(", ")));
    }

    paragraph
}

/// "at dawn", "in the evening", ...
pub(super) fn time_phrase(time: TimeOfDay) -> String {
    match time {
        TimeOfDay::Dawn | TimeOfDay::Noon | TimeOfDay::Night | TimeOfDay::Midnight => {
            format!("at {}", time)
        }
        _ => format!("in the {}", time),
    }
}

/// Trimmed text ending in terminal punctuation, or `None` when blank
pub(super) fn sentence(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.ends_with(['.', '!', '?']) {
        Some(trimmed.to_string())
    } else {
        Some(format!("{}.", trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{CharacterRole, Genre, SettingType};

    #[test]
    fn test_scene_lists_setting_details_and_cast() {
        let setting = Setting::new("Whispering Woods", Genre::Fantasy, SettingType::Forest)
            .with_time_of_day(TimeOfDay::Evening)
            .with_weather("Misty")
            .with_atmosphere("Ancient trees murmur secrets")
            .with_description("A forest older than the kingdom.");
        let aria = Character::new("Aria", CharacterRole::Protagonist);
        let malachar = Character::new("Malachar", CharacterRole::Antagonist);

        let text = scene_description(&setting, &[&aria, &malachar]);
        assert_eq!(
            text,
            "The scene takes place in Whispering Woods in the evening. The weather is misty. \
             Ancient trees murmur secrets. A forest older than the kingdom. \
             Present in this scene: Aria, Malachar."
        );
    }

    #[test]
    fn test_scene_without_optional_details() {
        let setting = Setting::new("Iron Keep", Genre::Fantasy, SettingType::Castle);
        assert_eq!(scene_description(&setting, &[]), "The scene takes place in Iron Keep.");
    }
}
