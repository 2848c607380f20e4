//! Structural outline generator
//!
//! Turns selected characters, settings, and themes into an ordered sequence
//! of plot beats. Two beat strategies are supported and kept separate:
//!
//! - [`BeatStrategy::FixedEightBeat`] always emits the canonical eight-beat
//!   three-act sequence, whatever structure was requested.
//! - [`BeatStrategy::TemplateDriven`] walks the requested structure template
//!   act by act and draws conflict phrases from the theme lexicon.
//!
//! The generator holds no state between calls; the returned outline owns
//! copies of every input entity.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::lexicon::{
    conflict_pattern, genre_title_adjectives, genre_title_words, theme_title_words,
};
use super::phrase_chooser::{pick, PhraseChooser};
use super::structure_templates::structure_template;
use crate::domain::entities::{
    find_antagonist, find_protagonist, Character, PlotBeat, Setting, StoryOutline, Theme,
};
use crate::domain::value_objects::{
    BeatType, CharacterId, GenerationOptions, Genre, OutlineId, PersonalityTrait, StoryStructure,
    WORDS_PER_MINUTE,
};

/// Precondition violations; generation never proceeds past these
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutlineError {
    #[error("At least one character is required to generate an outline")]
    NoCharacters,
    #[error("At least one setting is required to generate an outline")]
    NoSettings,
    #[error("At least one theme is required to generate an outline")]
    NoThemes,
}

/// How beats are laid out for an outline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BeatStrategy {
    /// Canonical eight beats across three acts, independent of structure
    #[default]
    FixedEightBeat,
    /// One beat per beat type declared by the structure template
    TemplateDriven,
}

/// Everything needed to generate one outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineRequest {
    pub characters: Vec<Character>,
    pub settings: Vec<Setting>,
    pub themes: Vec<Theme>,
    #[serde(default)]
    pub options: GenerationOptions,
    #[serde(default)]
    pub structure: StoryStructure,
    #[serde(default)]
    pub strategy: BeatStrategy,
}

impl OutlineRequest {
    #[cfg(test)]
    pub fn new(
        characters: Vec<Character>,
        settings: Vec<Setting>,
        themes: Vec<Theme>,
        options: GenerationOptions,
    ) -> Self {
        Self {
            characters,
            settings,
            themes,
            options,
            structure: StoryStructure::default(),
            strategy: BeatStrategy::default(),
        }
    }

    #[cfg(test)]
    pub fn with_structure(mut self, structure: StoryStructure) -> Self {
        self.structure = structure;
        self
    }

    #[cfg(test)]
    pub fn with_strategy(mut self, strategy: BeatStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Fail fast on empty inputs
    pub fn validate(&self) -> Result<(), OutlineError> {
        if self.characters.is_empty() {
            return Err(OutlineError::NoCharacters);
        }
        if self.settings.is_empty() {
            return Err(OutlineError::NoSettings);
        }
        if self.themes.is_empty() {
            return Err(OutlineError::NoThemes);
        }
        Ok(())
    }
}

/// Validated view over the inputs with the principal roles resolved
struct Cast<'a> {
    characters: &'a [Character],
    settings: &'a [Setting],
    themes: &'a [Theme],
    protagonist: &'a Character,
    antagonist: Option<&'a Character>,
}

impl<'a> Cast<'a> {
    fn resolve(
        characters: &'a [Character],
        settings: &'a [Setting],
        themes: &'a [Theme],
    ) -> Result<Self, OutlineError> {
        let protagonist = find_protagonist(characters).ok_or(OutlineError::NoCharacters)?;
        if settings.is_empty() {
            return Err(OutlineError::NoSettings);
        }
        if themes.is_empty() {
            return Err(OutlineError::NoThemes);
        }
        let antagonist = find_antagonist(characters).filter(|a| a.id != protagonist.id);

        Ok(Self {
            characters,
            settings,
            themes,
            protagonist,
            antagonist,
        })
    }

    fn primary_theme(&self) -> &Theme {
        &self.themes[0]
    }

    /// Settings are consumed in order and clamp to the last one
    fn setting_for(&self, order: u32) -> &'a Setting {
        let index = (order.max(1) as usize - 1).min(self.settings.len() - 1);
        &self.settings[index]
    }

    fn protagonist_only(&self) -> Vec<CharacterId> {
        vec![self.protagonist.id]
    }

    fn protagonist_and_antagonist(&self) -> Vec<CharacterId> {
        match self.antagonist {
            Some(antagonist) => vec![self.protagonist.id, antagonist.id],
            None => self.protagonist_only(),
        }
    }

    /// Every supplied character, each exactly once, in input order
    fn everyone(&self) -> Vec<CharacterId> {
        let mut ids = Vec::with_capacity(self.characters.len());
        for character in self.characters {
            if !ids.contains(&character.id) {
                ids.push(character.id);
            }
        }
        ids
    }
}

/// Stateless outline generator
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineGenerator;

impl OutlineGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a complete outline
    pub fn generate<C: PhraseChooser + ?Sized>(
        &self,
        request: &OutlineRequest,
        chooser: &mut C,
    ) -> Result<StoryOutline, OutlineError> {
        request.validate()?;
        let cast = Cast::resolve(&request.characters, &request.settings, &request.themes)?;

        let plot_points = match request.strategy {
            BeatStrategy::FixedEightBeat => fixed_beats(&cast),
            BeatStrategy::TemplateDriven => template_beats(&cast, request.structure, chooser),
        };

        let genre = cast.settings[0].genre;
        let themes: Vec<_> = request.themes.iter().map(|t| t.primary).collect();
        let title = match request.strategy {
            BeatStrategy::FixedEightBeat => generate_title(&request.themes, genre, chooser),
            BeatStrategy::TemplateDriven => {
                protagonist_title(&request.themes, genre, &cast.protagonist.name, chooser)
            }
        };

        Ok(StoryOutline {
            id: OutlineId::new(),
            title,
            genre,
            themes,
            structure: request.structure,
            characters: request.characters.clone(),
            settings: request.settings.clone(),
            plot_points,
            summary: summarize(&cast),
            word_count_target: request.options.length.target_word_count(),
            estimated_reading_time: request.options.length.reading_time_minutes(),
            created_at: Utc::now(),
        })
    }

    /// Fixed eight-beat sequence for the given inputs
    #[cfg(test)]
    pub fn fixed_beats(
        &self,
        characters: &[Character],
        settings: &[Setting],
        themes: &[Theme],
    ) -> Result<Vec<PlotBeat>, OutlineError> {
        let cast = Cast::resolve(characters, settings, themes)?;
        Ok(fixed_beats(&cast))
    }

    /// Beats laid out by a structure template
    #[cfg(test)]
    pub fn template_beats<C: PhraseChooser + ?Sized>(
        &self,
        characters: &[Character],
        settings: &[Setting],
        themes: &[Theme],
        structure: StoryStructure,
        chooser: &mut C,
    ) -> Result<Vec<PlotBeat>, OutlineError> {
        let cast = Cast::resolve(characters, settings, themes)?;
        Ok(template_beats(&cast, structure, chooser))
    }
}

fn fixed_beats(cast: &Cast<'_>) -> Vec<PlotBeat> {
    let p = &cast.protagonist.name;
    let theme = cast.primary_theme().primary;

    let obstacle = match cast.antagonist {
        Some(antagonist) => format!("{} begins to emerge as a threat.", antagonist.name),
        None => "The central conflict intensifies.".to_string(),
    };

    let beats = [
        (
            BeatType::Setup,
            1,
            "Opening Scene",
            format!(
                "Introduce {} in {}. Establish the ordinary world and hint at the central conflict.",
                p,
                cast.setting_for(1).name
            ),
            cast.protagonist_only(),
        ),
        (
            BeatType::IncitingIncident,
            1,
            "Inciting Incident",
            format!(
                "An event disrupts {}'s normal life, setting the story in motion. This relates to the theme of {}.",
                p, theme
            ),
            cast.protagonist_only(),
        ),
        (
            BeatType::PlotPoint,
            1,
            "First Plot Point",
            format!("{} commits to the journey or quest. No turning back.", p),
            cast.protagonist_only(),
        ),
        (
            BeatType::PlotPoint,
            2,
            "First Obstacle",
            format!("{} faces their first major challenge. {}", p, obstacle),
            cast.protagonist_and_antagonist(),
        ),
        (
            BeatType::Midpoint,
            2,
            "Midpoint",
            format!(
                "A major revelation or turning point. {} gains new understanding but faces greater stakes.",
                p
            ),
            cast.protagonist_only(),
        ),
        (
            BeatType::Crisis,
            2,
            "Crisis",
            format!(
                "{} faces their darkest moment. All seems lost. This tests the theme of {}.",
                p, theme
            ),
            cast.protagonist_only(),
        ),
        (
            BeatType::Climax,
            3,
            "Climax",
            format!(
                "The final confrontation. {} uses everything they've learned to face the ultimate challenge.",
                p
            ),
            cast.everyone(),
        ),
        (
            BeatType::Resolution,
            3,
            "Resolution",
            format!(
                "The aftermath. {} has changed, and the world reflects the theme of {}.",
                p, theme
            ),
            cast.protagonist_only(),
        ),
    ];

    beats
        .into_iter()
        .zip(1u32..)
        .map(|((beat_type, act, title, description, characters), order)| {
            PlotBeat::new(beat_type, act, order, title, description)
                .with_characters(characters)
                .with_setting(cast.setting_for(order).id)
        })
        .collect()
}

fn template_beats<C: PhraseChooser + ?Sized>(
    cast: &Cast<'_>,
    structure: StoryStructure,
    chooser: &mut C,
) -> Vec<PlotBeat> {
    let template = structure_template(structure);
    let mut beats = Vec::with_capacity(template.beat_count());
    let mut order = 1u32;

    for (act_index, act) in template.acts.iter().enumerate() {
        let act_number = act_index as u32 + 1;
        for beat_type in act.beats {
            beats.push(template_beat(cast, *beat_type, act_number, order, chooser));
            order += 1;
        }
    }

    beats
}

fn template_beat<C: PhraseChooser + ?Sized>(
    cast: &Cast<'_>,
    beat_type: BeatType,
    act: u32,
    order: u32,
    chooser: &mut C,
) -> PlotBeat {
    let setting = cast.setting_for(order);
    let theme = cast.primary_theme().primary;
    let conflict = conflict_pattern(theme);
    let p = &cast.protagonist.name;

    let (title, description) = match beat_type {
        BeatType::Setup => (
            "Opening Scene",
            format!(
                "Introduce {} in their ordinary world at {}. Show their current life, goals, and the world's rules. Hint at the central conflict of {}.",
                p, setting.name, theme
            ),
        ),
        BeatType::IncitingIncident => (
            "The Call to Adventure",
            format!(
                "An event disrupts {}'s normal life, presenting the central conflict. {} forces them to act.",
                p,
                capitalize(pick(chooser, conflict.external))
            ),
        ),
        BeatType::PlotPoint if act == 1 => (
            "Crossing the Threshold",
            format!(
                "{} commits to the journey, leaving their comfort zone. No turning back from the path of {}.",
                p, theme
            ),
        ),
        BeatType::PlotPoint => {
            let escalation = match cast.antagonist {
                Some(antagonist) => format!("{} escalates the conflict.", antagonist.name),
                None => "The stakes are raised.".to_string(),
            };
            (
                "Major Obstacle",
                format!(
                    "{} faces a significant challenge. {} {} becomes apparent.",
                    p,
                    escalation,
                    capitalize(pick(chooser, conflict.internal))
                ),
            )
        }
        BeatType::Midpoint => (
            "Point of No Return",
            format!(
                "A major revelation changes everything. {} gains new understanding about {} but faces greater stakes. {} intensifies.",
                p,
                theme,
                capitalize(pick(chooser, conflict.external))
            ),
        ),
        BeatType::Crisis => (
            "Dark Night of the Soul",
            format!(
                "{} faces their lowest point. {} reaches its peak. All seems lost in the struggle with {}.",
                p,
                capitalize(pick(chooser, conflict.internal)),
                theme
            ),
        ),
        BeatType::Climax => {
            let confrontation = match cast.antagonist {
                Some(antagonist) => format!("Direct confrontation with {}.", antagonist.name),
                None => "The central conflict reaches its peak.".to_string(),
            };
            (
                "Final Confrontation",
                format!(
                    "The ultimate test. {} uses everything they've learned to face the final challenge. {} The theme of {} is fully explored.",
                    p, confrontation, theme
                ),
            )
        }
        BeatType::Resolution => (
            "New Equilibrium",
            format!(
                "The aftermath of the climax. {} has changed, and the world reflects this transformation. {} brings closure to the theme of {}.",
                p,
                capitalize(pick(chooser, conflict.resolution)),
                theme
            ),
        ),
    };

    let characters = match beat_type {
        BeatType::Setup | BeatType::Crisis | BeatType::Resolution => cast.protagonist_only(),
        BeatType::Climax => cast.protagonist_and_antagonist(),
        _ if cast.antagonist.is_some() && chooser.chance(0.5) => cast.protagonist_and_antagonist(),
        _ => cast.protagonist_only(),
    };

    PlotBeat::new(beat_type, act, order, title, description)
        .with_characters(characters)
        .with_setting(setting.id)
}

/// Title from a theme noun and a genre word in one of four fixed patterns
pub fn generate_title<C: PhraseChooser + ?Sized>(
    themes: &[Theme],
    genre: Genre,
    chooser: &mut C,
) -> String {
    let theme_word = themes
        .first()
        .map(|t| pick(chooser, theme_title_words(t.primary)))
        .unwrap_or("Story");
    let genre_word = pick(chooser, genre_title_words(genre));

    match chooser.pick_index(4) {
        0 => format!("The {} of {}", theme_word, genre_word),
        1 => format!("{}'s {}", theme_word, genre_word),
        2 => format!("The {} {}", genre_word, theme_word),
        _ => format!("{} of {}", genre_word, theme_word),
    }
}

/// Title built around the protagonist, in one of six patterns
fn protagonist_title<C: PhraseChooser + ?Sized>(
    themes: &[Theme],
    genre: Genre,
    protagonist: &str,
    chooser: &mut C,
) -> String {
    let theme_word = themes
        .first()
        .map(|t| pick(chooser, theme_title_words(t.primary)))
        .unwrap_or("Story");
    let genre_noun = pick(chooser, genre_title_words(genre));
    let genre_adjective = pick(chooser, genre_title_adjectives(genre));

    match chooser.pick_index(6) {
        0 => format!("The {} of {}", theme_word, protagonist),
        1 => format!("{} and the {}", protagonist, genre_noun),
        2 => format!("The {} {}", genre_adjective, theme_word),
        3 => format!("{}'s {}", theme_word, genre_noun),
        4 => format!("Beyond the {}", genre_noun),
        _ => format!("The Last {}", theme_word),
    }
}

/// One-paragraph summary of the selected inputs
#[cfg(test)]
pub fn generate_summary(
    characters: &[Character],
    settings: &[Setting],
    themes: &[Theme],
) -> Result<String, OutlineError> {
    let cast = Cast::resolve(characters, settings, themes)?;
    Ok(summarize(&cast))
}

fn summarize(cast: &Cast<'_>) -> String {
    let protagonist = cast.protagonist;
    let primary = cast.primary_theme().primary;

    let mut summary = format!(
        "In {}, {} must confront ",
        cast.settings[0].name, protagonist.name
    );

    match cast.antagonist {
        Some(antagonist) => summary.push_str(&format!(
            "{} while dealing with themes of {}",
            antagonist.name, primary
        )),
        None => summary.push_str(&format!(
            "challenges that test their understanding of {}",
            primary
        )),
    }

    if cast.themes.len() > 1 {
        let rest: Vec<_> = cast.themes[1..].iter().map(|t| t.primary.as_str()).collect();
        summary.push_str(&format!(" and {}", rest.join(", ")));
    }

    summary.push_str(&format!(
        ". Through their journey, they will discover what it truly means to {}.",
        protagonist.first_goal().unwrap_or("find their purpose")
    ));

    summary
}

/// Five arc stages for a character under a theme
pub fn generate_character_arc<C: PhraseChooser + ?Sized>(
    character: &Character,
    theme: &Theme,
    chooser: &mut C,
) -> Vec<String> {
    let conflict = conflict_pattern(theme.primary);
    let name = &character.name;

    vec![
        format!(
            "{} begins as someone who {}",
            name,
            character.first_flaw().unwrap_or("struggles with self-doubt")
        ),
        format!(
            "When faced with {}, they must confront {}",
            pick(chooser, conflict.external),
            pick(chooser, conflict.internal)
        ),
        format!(
            "Through trials, {} learns that {} requires personal growth",
            name,
            character.first_goal().unwrap_or("their true purpose")
        ),
        format!(
            "At their lowest point, {} must choose between their old ways and embracing change",
            name
        ),
        format!(
            "By the end, {} achieves {} and becomes someone who embodies the theme of {}",
            name,
            pick(chooser, conflict.resolution),
            theme.primary
        ),
    ]
}

/// Writing prompts for a character's dialogue, driven by personality
pub fn generate_dialogue_prompts(character: &Character) -> Vec<String> {
    let name = &character.name;
    let mut prompts = Vec::new();

    let trait_prompts = [
        (PersonalityTrait::Brave, "speaks boldly about facing the challenge"),
        (PersonalityTrait::Intelligent, "analyzes the situation logically"),
        (PersonalityTrait::Kind, "shows concern for others affected"),
        (PersonalityTrait::Deceptive, "carefully chooses words to mislead"),
    ];
    for (personality_trait, prompt) in trait_prompts {
        if character.has_trait(personality_trait) {
            prompts.push(format!("{} {}", name, prompt));
        }
    }

    prompts.push(format!(
        "{} reveals their motivation: \"{}\"",
        name,
        character.first_goal().unwrap_or("I must do what's right")
    ));
    prompts.push(format!(
        "{} struggles with their flaw: \"{}\"",
        name,
        character.first_flaw().unwrap_or("I'm not sure I can do this")
    ));

    prompts
}

/// Reading time of a text in whole minutes, rounded up
pub fn estimate_reading_time(text: &str) -> u32 {
    (text.split_whitespace().count() as u32).div_ceil(WORDS_PER_MINUTE)
}

/// `Chapter N: <title>` for each beat in order
pub fn chapter_titles(beats: &[PlotBeat]) -> Vec<String> {
    beats
        .iter()
        .enumerate()
        .map(|(index, beat)| format!("Chapter {}: {}", index + 1, beat.title))
        .collect()
}

fn capitalize(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
