//! Narrative body strategies, one per beat type
//!
//! Paragraph counts depend only on the inputs (bound setting, antagonist,
//! character details), never on random choices, so two drafts of the same
//! outline share their paragraph structure.

use super::dialogue::climax_exchange;
use super::scene::{sentence, time_phrase};
use super::{BeatCast, Voice};
use crate::domain::entities::{Character, PlotBeat, Setting};
use crate::domain::services::lexicon::{shock_reactions, DEFAULT_SHOCK_REACTION};
use crate::domain::services::phrase_chooser::{pick, PhraseChooser};
use crate::domain::value_objects::BeatType;

pub(super) fn narrative_paragraphs<C: PhraseChooser + ?Sized>(
    beat: &PlotBeat,
    cast: &BeatCast<'_>,
    voice: &Voice,
    chooser: &mut C,
) -> Vec<String> {
    let Some(protagonist) = cast.protagonist else {
        return generic(beat);
    };

    match beat.beat_type {
        BeatType::Setup => setup(protagonist, cast.setting, voice),
        BeatType::IncitingIncident => inciting_incident(protagonist, beat, voice, chooser),
        BeatType::PlotPoint => plot_point(protagonist, cast.antagonist, beat, voice),
        BeatType::Midpoint => midpoint(protagonist, beat, voice),
        BeatType::Crisis => crisis(protagonist, beat, voice),
        BeatType::Climax => climax(protagonist, cast.antagonist, beat, voice, chooser),
        BeatType::Resolution => resolution(protagonist, beat, voice),
    }
}

fn setup(protagonist: &Character, setting: Option<&Setting>, voice: &Voice) -> Vec<String> {
    let name = &protagonist.name;
    let mut paragraphs = Vec::with_capacity(4);

    if let Some(setting) = setting {
        let mut opening: Vec<String> = [sentence(&setting.atmosphere), sentence(&setting.description)]
            .into_iter()
            .flatten()
            .collect();
        if let Some(time) = setting.time_of_day {
            let place = setting
                .key_locations
                .first()
                .map(String::as_str)
                .unwrap_or("the landscape");
            opening.push(format!("Light {} fell across {}.", time_phrase(time), place));
        }
        if let Some(weather) = setting.weather.as_deref().filter(|w| !w.trim().is_empty()) {
            opening.push(format!(
                "The {} weather settled over everything.",
                weather.trim().to_lowercase()
            ));
        }
        if !opening.is_empty() {
            paragraphs.push(opening.join(" "));
        }
    }

    let mut introduction = format!(
        "{} moved through this world with the ease of someone who belonged to it. {}",
        voice.subject(),
        portrait(protagonist)
    );
    if let Some(age) = protagonist.age {
        introduction.push_str(&format!(
            " At {}, {} had seen enough of life to know how quickly it could turn.",
            age, name
        ));
    }
    paragraphs.push(introduction);

    let mut purpose = format!(
        "Each day bent toward a single purpose: to {}.",
        protagonist.first_goal().unwrap_or("find a true calling")
    );
    if let Some(second) = protagonist.goals.get(1) {
        purpose.push_str(&format!(" Beneath it lay another wish, to {}.", second));
    }
    purpose.push_str(&format!(
        " Yet for all that determination, {} struggled with {}.",
        name,
        protagonist.first_flaw().unwrap_or("a quiet uncertainty")
    ));
    if let Some(second) = protagonist.flaws.get(1) {
        purpose.push_str(&format!(" It did not help that {} was prone to {}.", name, second));
    }
    paragraphs.push(purpose);

    paragraphs.push(format!(
        "On this particular day {} had no way of knowing that forces beyond their understanding were already in motion. \
         The ordinary world was about to break apart, and nothing would be the same again.",
        name
    ));

    paragraphs
}

fn inciting_incident<C: PhraseChooser + ?Sized>(
    protagonist: &Character,
    beat: &PlotBeat,
    voice: &Voice,
    chooser: &mut C,
) -> Vec<String> {
    let name = &protagonist.name;
    vec![
        format!(
            "{} sensed it before anything happened: a change in the air, faint and impossible to name. \
             {} grew more watchful than usual without knowing why.",
            voice.subject(),
            name
        ),
        format!(
            "Then it came. {} Every detail of that moment burned itself into {}'s memory.",
            beat.description, name
        ),
        format!(
            "{}'s first instinct was {}. There was no plan for this, and no time to make one.",
            name,
            shock_reaction(protagonist, chooser)
        ),
        format!(
            "When the shock faded, understanding took its place. The familiar world was gone, and something unknown stood where it had been. \
             {} could try to turn back, but already knew no road led there anymore.",
            name
        ),
    ]
}

fn plot_point(
    protagonist: &Character,
    antagonist: Option<&Character>,
    beat: &PlotBeat,
    voice: &Voice,
) -> Vec<String> {
    let name = &protagonist.name;
    let mut paragraph = format!("{} faced a serious challenge. {}", voice.subject(), beat.description);
    if let Some(antagonist) = antagonist {
        paragraph.push_str(&format!(
            " {} stood in the way, testing {}'s resolve.",
            antagonist.name, name
        ));
    }
    paragraph.push_str(&format!(
        " {} had to reach deeper and find a strength not yet tested.",
        name
    ));
    vec![paragraph]
}

fn midpoint(protagonist: &Character, beat: &PlotBeat, voice: &Voice) -> Vec<String> {
    let name = &protagonist.name;
    vec![format!(
        "{} reached a turning point. {} Everything {} believed was thrown into doubt, and the stakes had never been higher. \
         There was no returning to the way things had been; {} would have to change or lose everything.",
        voice.subject(),
        beat.description,
        name,
        name
    )]
}

fn crisis(protagonist: &Character, beat: &PlotBeat, voice: &Voice) -> Vec<String> {
    let name = &protagonist.name;
    let mut paragraph = format!(
        "{} faced the darkest hour. {} Hope seemed to have gone out of the world.",
        voice.subject(),
        beat.description
    );
    if let Some(flaw) = protagonist.first_flaw() {
        paragraph.push_str(&format!(" The old weakness, {}, threatened to swallow {} whole.", flaw, name));
    }
    paragraph.push_str(&format!(" Even so, {} had to find a reason to keep going.", name));
    vec![paragraph]
}

fn climax<C: PhraseChooser + ?Sized>(
    protagonist: &Character,
    antagonist: Option<&Character>,
    beat: &PlotBeat,
    voice: &Voice,
    chooser: &mut C,
) -> Vec<String> {
    let name = &protagonist.name;
    let mut paragraphs = vec![format!(
        "{} had reached the moment of reckoning, the one dreaded and prepared for in equal measure. \
         Every lesson and every sacrifice had led here. There was nowhere left to run.",
        voice.subject()
    )];

    if let Some(antagonist) = antagonist {
        paragraphs.extend(climax_exchange(protagonist, antagonist, chooser));
    }

    paragraphs.push(format!(
        "{} All that {} had learned about courage and about what truly mattered was put to the final test.",
        beat.description, name
    ));
    paragraphs.push(format!(
        "In that moment {} found a strength that was more than physical. The {} that had followed them all this way finally fell away, leaving clarity and purpose.",
        name,
        protagonist.first_flaw().unwrap_or("doubt")
    ));
    paragraphs.push(format!(
        "When it was over, {} stood transformed. The goal that began it all, to {}, had grown into something far greater.",
        name,
        protagonist.first_goal().unwrap_or("find a purpose")
    ));

    paragraphs
}

fn resolution(protagonist: &Character, beat: &PlotBeat, voice: &Voice) -> Vec<String> {
    let name = &protagonist.name;
    vec![format!(
        "{} watched the dust settle as a new balance took shape. {} The journey had changed {} at the root. \
         What began as a wish to {} had become something deeper. The adventure was over, but its lessons would last a lifetime.",
        voice.subject(),
        beat.description,
        name,
        protagonist.first_goal().unwrap_or("find a purpose")
    )]
}

/// Used when no character can anchor the beat
fn generic(beat: &PlotBeat) -> Vec<String> {
    vec![format!(
        "The story moved on. {} Each step forward brought new challenges and revelations, and the path ahead remained uncertain.",
        beat.description
    )]
}

/// Short prose portrait from description, appearance, traits, and backstory
fn portrait(character: &Character) -> String {
    let name = &character.name;
    let mut parts = Vec::with_capacity(4);

    match sentence(&character.description) {
        Some(description) => parts.push(description),
        None => parts.push(format!(
            "{} remained something of a mystery, even to those closest to them.",
            name
        )),
    }
    if let Some(appearance) = character.appearance.as_deref().and_then(sentence) {
        parts.push(appearance);
    }
    if !character.personality_traits.is_empty() {
        let traits: Vec<_> = character
            .personality_traits
            .iter()
            .take(3)
            .map(|t| t.as_str())
            .collect();
        parts.push(format!("Those who knew {} would call them {}.", name, join_with_and(&traits)));
    }
    if let Some(backstory) = character.backstory.as_deref().and_then(sentence) {
        parts.push(backstory);
    }

    parts.join(" ")
}

/// First trait with a known reaction wins; otherwise a neutral freeze
fn shock_reaction<C: PhraseChooser + ?Sized>(character: &Character, chooser: &mut C) -> &'static str {
    character
        .personality_traits
        .iter()
        .find_map(|t| shock_reactions(*t))
        .map(|pool| pick(chooser, pool))
        .unwrap_or(DEFAULT_SHOCK_REACTION)
}

fn join_with_and(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [rest @ .., last] => format!("{} and {}", rest.join(", "), last),
    }
}
