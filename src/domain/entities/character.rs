//! Character entity - story participants with traits, goals, and flaws

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CharacterId, CharacterRole, PersonalityTrait};

/// A character selected for a story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(default)]
    pub id: CharacterId,
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub personality_traits: Vec<PersonalityTrait>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub flaws: Vec<String>,
    #[serde(default)]
    pub backstory: Option<String>,
    #[serde(default)]
    pub appearance: Option<String>,
    pub role: CharacterRole,
}

impl Character {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, role: CharacterRole) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            age: None,
            description: String::new(),
            personality_traits: Vec::new(),
            goals: Vec::new(),
            flaws: Vec::new(),
            backstory: None,
            appearance: None,
            role,
        }
    }

    #[cfg(test)]
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    #[cfg(test)]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[cfg(test)]
    pub fn with_trait(mut self, personality_trait: PersonalityTrait) -> Self {
        if !self.personality_traits.contains(&personality_trait) {
            self.personality_traits.push(personality_trait);
        }
        self
    }

    #[cfg(test)]
    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goals.push(goal.into());
        self
    }

    #[cfg(test)]
    pub fn with_flaw(mut self, flaw: impl Into<String>) -> Self {
        self.flaws.push(flaw.into());
        self
    }

    #[cfg(test)]
    pub fn with_backstory(mut self, backstory: impl Into<String>) -> Self {
        self.backstory = Some(backstory.into());
        self
    }

    #[cfg(test)]
    pub fn with_appearance(mut self, appearance: impl Into<String>) -> Self {
        self.appearance = Some(appearance.into());
        self
    }

    pub fn has_trait(&self, personality_trait: PersonalityTrait) -> bool {
        self.personality_traits.contains(&personality_trait)
    }

    pub fn first_goal(&self) -> Option<&str> {
        self.goals.first().map(String::as_str)
    }

    pub fn first_flaw(&self) -> Option<&str> {
        self.flaws.first().map(String::as_str)
    }
}

/// The protagonist of a cast: first character tagged protagonist, else the first character
pub fn find_protagonist(characters: &[Character]) -> Option<&Character> {
    characters
        .iter()
        .find(|c| c.role == CharacterRole::Protagonist)
        .or_else(|| characters.first())
}

/// The first character tagged antagonist, if any
pub fn find_antagonist(characters: &[Character]) -> Option<&Character> {
    characters
        .iter()
        .find(|c| c.role == CharacterRole::Antagonist)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protagonist_falls_back_to_first_character() {
        let cast = vec![
            Character::new("Bram", CharacterRole::Supporting),
            Character::new("Lio", CharacterRole::Antagonist),
        ];

        assert_eq!(find_protagonist(&cast).unwrap().name, "Bram");
        assert_eq!(find_antagonist(&cast).unwrap().name, "Lio");
    }

    #[test]
    fn test_protagonist_prefers_role_over_position() {
        let cast = vec![
            Character::new("Bram", CharacterRole::Supporting),
            Character::new("Aria", CharacterRole::Protagonist),
        ];

        assert_eq!(find_protagonist(&cast).unwrap().name, "Aria");
        assert!(find_antagonist(&cast).is_none());
    }

    #[test]
    fn test_with_trait_keeps_traits_unique() {
        let character = Character::new("Aria", CharacterRole::Protagonist)
            .with_trait(PersonalityTrait::Brave)
            .with_trait(PersonalityTrait::Brave)
            .with_trait(PersonalityTrait::Loyal);

        assert_eq!(
            character.personality_traits,
            vec![PersonalityTrait::Brave, PersonalityTrait::Loyal]
        );
    }
}
