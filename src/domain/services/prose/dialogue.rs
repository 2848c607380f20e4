use crate::domain::entities::Character;
use crate::domain::services::lexicon::dialogue::{
    BRAVE_OPENING, CLIMAX_CONFRONTATION, CLIMAX_RESPONSE, DECEPTIVE_RESPONSE, OPENING, REACTION,
    RESPONSE,
};
use crate::domain::services::phrase_chooser::{pick, PhraseChooser};
use crate::domain::value_objects::PersonalityTrait;

/// Separator between the narrative and the dialogue section
pub const DIALOGUE_SEPARATOR: &str = "---";

/// Three-line exchange: protagonist opens, the other answers, protagonist reacts
pub(super) fn dialogue_section<C: PhraseChooser + ?Sized>(
    protagonist: &Character,
    other: &Character,
    chooser: &mut C,
) -> Vec<String> {
    let opening = if protagonist.has_trait(PersonalityTrait::Brave) {
        BRAVE_OPENING
    } else {
        pick(chooser, OPENING)
    };
    let response = if other.has_trait(PersonalityTrait::Deceptive) {
        DECEPTIVE_RESPONSE
    } else {
        pick(chooser, RESPONSE)
    };
    let reaction = pick(chooser, REACTION);

    vec![
        DIALOGUE_SEPARATOR.to_string(),
        format!("\"{},\" {} said.", opening, protagonist.name),
        format!("\"{},\" {} replied.", response, other.name),
        format!("\"{},\" {} answered.", reaction, protagonist.name),
    ]
}

/// Challenge and retort between protagonist and antagonist at the climax
pub(super) fn climax_exchange<C: PhraseChooser + ?Sized>(
    protagonist: &Character,
    antagonist: &Character,
    chooser: &mut C,
) -> [String; 2] {
    [
        format!(
            "{} stood face to face with {}, the air between them taut. \"{}\" {} said, voice steady despite the storm within.",
            protagonist.name,
            antagonist.name,
            pick(chooser, CLIMAX_CONFRONTATION),
            protagonist.name
        ),
        format!(
            "{} smiled without warmth. \"{}\"",
            antagonist.name,
            pick(chooser, CLIMAX_RESPONSE)
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::phrase_chooser::FixedChooser;
    use crate::domain::value_objects::CharacterRole;

    #[test]
    fn test_plain_exchange_uses_pools() {
        let aria = Character::new("Aria", CharacterRole::Protagonist);
        let bram = Character::new("Bram", CharacterRole::Supporting);

        let lines = dialogue_section(&aria, &bram, &mut FixedChooser::first());
        assert_eq!(
            lines,
            vec![
                "---".to_string(),
                "\"I never expected things to turn out this way,\" Aria said.".to_string(),
                "\"I understand how you feel,\" Bram replied.".to_string(),
                "\"Thank you for believing in me,\" Aria answered.".to_string(),
            ]
        );
    }

    #[test]
    fn test_trait_overrides() {
        let aria = Character::new("Aria", CharacterRole::Protagonist).with_trait(PersonalityTrait::Brave);
        let malachar =
            Character::new("Malachar", CharacterRole::Antagonist).with_trait(PersonalityTrait::Deceptive);

        let lines = dialogue_section(&aria, &malachar, &mut FixedChooser { index: 2, coin: false });
        assert!(lines[1].contains(BRAVE_OPENING));
        assert!(lines[2].contains(DECEPTIVE_RESPONSE));
        assert!(lines[3].contains("I won't let you down"));
    }
}
