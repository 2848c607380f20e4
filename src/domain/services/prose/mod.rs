//! Rule-based prose synthesis
//!
//! Expands each plot beat of an outline into a chapter: a scene paragraph
//! for the bound setting, a narrative body chosen by beat type, and an
//! optional three-line dialogue exchange. Whole documents are a title line,
//! the italicized summary, then one `## Chapter N: title` block per beat.

mod dialogue;
mod narrative;
mod scene;

use super::phrase_chooser::PhraseChooser;
use crate::domain::entities::{Character, PlotBeat, Setting, StoryOutline};
use crate::domain::value_objects::{CharacterRole, GenerationOptions, NarrativePerspective};

/// Characters and setting resolved for one beat
#[derive(Debug, Default)]
pub(crate) struct BeatCast<'a> {
    pub participants: Vec<&'a Character>,
    pub protagonist: Option<&'a Character>,
    pub antagonist: Option<&'a Character>,
    pub setting: Option<&'a Setting>,
}

impl<'a> BeatCast<'a> {
    /// Resolve a beat's participants and setting by identity
    ///
    /// The protagonist is the participant with the protagonist role, else the
    /// first participant, else the outline's own protagonist.
    pub fn resolve(outline: &'a StoryOutline, beat: &PlotBeat) -> Self {
        let participants = outline.participants(beat);
        let protagonist = participants
            .iter()
            .find(|c| c.role == CharacterRole::Protagonist)
            .or_else(|| participants.first())
            .copied()
            .or_else(|| outline.protagonist());
        let antagonist = participants
            .iter()
            .find(|c| c.role == CharacterRole::Antagonist && Some(c.id) != protagonist.map(|p| p.id))
            .copied();

        Self {
            setting: outline.setting_for(beat),
            participants,
            protagonist,
            antagonist,
        }
    }

    /// First participant other than the protagonist
    fn counterpart(&self) -> Option<&'a Character> {
        let protagonist = self.protagonist?;
        self.participants.iter().find(|c| c.id != protagonist.id).copied()
    }
}

/// Grammatical subject for the opening sentence of a narrative body
#[derive(Debug, Clone, Copy)]
pub(crate) struct Voice<'a> {
    perspective: NarrativePerspective,
    name: &'a str,
}

impl<'a> Voice<'a> {
    pub fn new(perspective: NarrativePerspective, name: &'a str) -> Self {
        Self { perspective, name }
    }

    pub fn subject(&self) -> String {
        match self.perspective {
            NarrativePerspective::First => "I".to_string(),
            NarrativePerspective::Second => "You".to_string(),
            NarrativePerspective::ThirdLimited => self.name.to_string(),
            NarrativePerspective::ThirdOmniscient => format!("In this moment, {}", self.name),
        }
    }
}

/// `## Chapter N: title`
pub fn chapter_heading(chapter_number: u32, title: &str) -> String {
    format!("## Chapter {}: {}", chapter_number, title)
}

/// Title line and italicized summary that open every document
pub fn document_preamble(outline: &StoryOutline) -> String {
    format!("# {}\n\n*{}*", outline.title, outline.summary)
}

/// Paragraphs of one chapter body, without its heading
pub fn chapter_paragraphs<C: PhraseChooser + ?Sized>(
    outline: &StoryOutline,
    beat: &PlotBeat,
    options: &GenerationOptions,
    chooser: &mut C,
) -> Vec<String> {
    let cast = BeatCast::resolve(outline, beat);
    let name = cast.protagonist.map(|p| p.name.as_str()).unwrap_or_default();
    let voice = Voice::new(options.narrative_perspective, name);

    let mut paragraphs = Vec::new();
    if let Some(setting) = cast.setting {
        paragraphs.push(scene::scene_description(setting, &cast.participants));
    }
    paragraphs.extend(narrative::narrative_paragraphs(beat, &cast, &voice, chooser));

    if options.include_dialogue && cast.participants.len() >= 2 {
        if let (Some(protagonist), Some(other)) = (cast.protagonist, cast.counterpart()) {
            paragraphs.extend(dialogue::dialogue_section(protagonist, other, chooser));
        }
    }

    paragraphs
}

/// One chapter body, without its heading
pub fn compose_chapter_body<C: PhraseChooser + ?Sized>(
    outline: &StoryOutline,
    beat: &PlotBeat,
    options: &GenerationOptions,
    chooser: &mut C,
) -> String {
    chapter_paragraphs(outline, beat, options, chooser).join("\n\n")
}

/// One chapter block: heading followed by its body
pub fn compose_chapter<C: PhraseChooser + ?Sized>(
    outline: &StoryOutline,
    beat: &PlotBeat,
    options: &GenerationOptions,
    chapter_number: u32,
    chooser: &mut C,
) -> String {
    format!(
        "{}\n\n{}",
        chapter_heading(chapter_number, &beat.title),
        compose_chapter_body(outline, beat, options, chooser)
    )
}

/// Join a preamble and chapter blocks into one document
pub fn assemble_document<I>(outline: &StoryOutline, blocks: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut document = document_preamble(outline);
    for block in blocks {
        document.push_str("\n\n");
        document.push_str(block.as_ref());
    }
    document
}

/// The whole outline drafted with the rule-based engine, beats in order
pub fn compose_document<C: PhraseChooser + ?Sized>(
    outline: &StoryOutline,
    options: &GenerationOptions,
    chooser: &mut C,
) -> String {
    let mut beats: Vec<&PlotBeat> = outline.plot_points.iter().collect();
    beats.sort_by_key(|b| b.order);

    let blocks: Vec<String> = beats
        .into_iter()
        .zip(1u32..)
        .map(|(beat, chapter_number)| compose_chapter(outline, beat, options, chapter_number, chooser))
        .collect();

    assemble_document(outline, blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Theme;
    use crate::domain::services::outline_generator::{OutlineGenerator, OutlineRequest};
    use crate::domain::services::phrase_chooser::{FixedChooser, RngChooser};
    use crate::domain::value_objects::{Genre, PersonalityTrait, SettingType, ThemeTag, TimeOfDay};

    fn outline(options: &GenerationOptions) -> StoryOutline {
        let request = OutlineRequest::new(
            vec![
                Character::new("Aria", CharacterRole::Protagonist)
                    .with_trait(PersonalityTrait::Brave)
                    .with_goal("find her lost brother"),
                Character::new("Malachar", CharacterRole::Antagonist),
                Character::new("Bram", CharacterRole::Supporting),
            ],
            vec![Setting::new("Whispering Woods", Genre::Fantasy, SettingType::Forest)
                .with_time_of_day(TimeOfDay::Night)
                .with_atmosphere("Ancient and watchful")],
            vec![Theme::new(ThemeTag::Redemption)],
            options.clone(),
        );
        OutlineGenerator::new()
            .generate(&request, &mut FixedChooser::first())
            .unwrap()
    }

    fn headings(document: &str) -> Vec<&str> {
        document.lines().filter(|l| l.starts_with('#')).collect()
    }

    fn paragraphs_per_chapter(document: &str) -> Vec<usize> {
        document
            .split("\n\n## ")
            .skip(1)
            .map(|chapter| chapter.split("\n\n").count())
            .collect()
    }

    #[test]
    fn test_document_layout() {
        let options = GenerationOptions::default();
        let outline = outline(&options);
        let document = compose_document(&outline, &options, &mut FixedChooser::first());

        assert!(document.starts_with(&format!("# {}\n\n*{}*\n\n## Chapter 1: Opening Scene", outline.title, outline.summary)));
        let headings = headings(&document);
        assert_eq!(headings.len(), 9);
        assert_eq!(headings[7], "## Chapter 7: Climax");
        assert_eq!(headings[8], "## Chapter 8: Resolution");
    }

    #[test]
    fn test_structure_is_stable_across_random_drafts() {
        let options = GenerationOptions::default();
        let outline = outline(&options);

        let first = compose_document(&outline, &options, &mut RngChooser::seeded(1));
        let second = compose_document(&outline, &options, &mut RngChooser::seeded(99));

        assert_eq!(headings(&first), headings(&second));
        assert_eq!(paragraphs_per_chapter(&first), paragraphs_per_chapter(&second));
    }

    #[test]
    fn test_dialogue_needs_two_participants_and_flag() {
        let options = GenerationOptions::default();
        let outline = outline(&options);
        let climax = &outline.plot_points[6];
        let opening = &outline.plot_points[0];

        let with = compose_chapter_body(&outline, climax, &options, &mut FixedChooser::first());
        assert!(with.contains("\n\n---\n\n"));
        assert!(with.contains("\"I'm ready to face whatever comes next,\" Aria said."));

        let solo = compose_chapter_body(&outline, opening, &options, &mut FixedChooser::first());
        assert!(!solo.contains("---"));

        let muted = options.clone().with_dialogue(false);
        let without = compose_chapter_body(&outline, climax, &muted, &mut FixedChooser::first());
        assert!(!without.contains("---"));
    }

    #[test]
    fn test_scene_paragraph_leads_each_chapter() {
        let options = GenerationOptions::default();
        let outline = outline(&options);
        let paragraphs = chapter_paragraphs(&outline, &outline.plot_points[6], &options, &mut FixedChooser::first());

        assert_eq!(
            paragraphs[0],
            "The scene takes place in Whispering Woods at night. Ancient and watchful. \
             Present in this scene: Aria, Malachar, Bram."
        );
    }

    #[test]
    fn test_cast_falls_back_to_outline_protagonist() {
        let options = GenerationOptions::default();
        let outline = outline(&options);
        let unbound = PlotBeat::new(crate::domain::value_objects::BeatType::Midpoint, 2, 5, "Loose", "Adrift.");

        let cast = BeatCast::resolve(&outline, &unbound);
        assert!(cast.participants.is_empty());
        assert!(cast.setting.is_none());
        assert_eq!(cast.protagonist.map(|p| p.name.as_str()), Some("Aria"));
    }
}
