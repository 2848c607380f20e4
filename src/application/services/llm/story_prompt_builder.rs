//! Prompt building for chapter generation requests

use crate::domain::entities::{Character, PlotBeat, Setting, StoryOutline};
use crate::domain::value_objects::GenerationOptions;

/// System message sent to chat-style providers alongside the chapter prompt
pub const SYSTEM_PROMPT: &str = "You are a skilled creative writer specializing in narrative fiction. \
Write engaging, well-structured prose with vivid descriptions and compelling character development.";

/// Build the full prompt asking a provider to write one chapter
pub fn build_chapter_prompt(
    beat: &PlotBeat,
    outline: &StoryOutline,
    options: &GenerationOptions,
    chapter_number: u32,
) -> String {
    let mut prompt = format!(
        "Write Chapter {} of a {} story titled \"{}\".\n\n",
        chapter_number, outline.genre, outline.title
    );

    prompt.push_str(&story_context(outline));
    prompt.push_str(&beat_details(beat));

    if let Some(setting) = outline.setting_for(beat) {
        prompt.push_str(&setting_block(setting));
    }

    prompt.push_str("CHARACTERS IN THIS CHAPTER:\n");
    for character in outline.participants(beat) {
        prompt.push_str(&character_block(character));
    }
    prompt.push('\n');

    prompt.push_str(&style_block(options));
    prompt.push_str(&instructions(options.include_dialogue));
    prompt.push_str("Write the chapter now:");

    prompt
}

fn story_context(outline: &StoryOutline) -> String {
    let themes: Vec<_> = outline.themes.iter().map(|t| t.as_str()).collect();
    format!(
        "STORY CONTEXT:\n- Genre: {}\n- Themes: {}\n- Summary: {}\n\n",
        outline.genre,
        themes.join(", "),
        outline.summary
    )
}

fn beat_details(beat: &PlotBeat) -> String {
    format!(
        "CHAPTER DETAILS:\n- Title: {}\n- Plot Point Type: {}\n- Act: {}\n- Description: {}\n\n",
        beat.title, beat.beat_type, beat.act, beat.description
    )
}

fn setting_block(setting: &Setting) -> String {
    let mut block = String::from("SETTING:\n");
    block.push_str(&format!("- Name: {}\n", setting.name));
    block.push_str(&format!("- Type: {}\n", setting.setting_type));
    block.push_str(&format!("- Description: {}\n", setting.description));
    block.push_str(&format!("- Atmosphere: {}\n", setting.atmosphere));
    if !setting.key_locations.is_empty() {
        block.push_str(&format!(
            "- Key Locations: {}\n",
            setting.key_locations.join(", ")
        ));
    }
    block.push('\n');
    block
}

fn character_block(character: &Character) -> String {
    let mut block = format!(
        "- {} ({}): {}\n",
        character.name, character.role, character.description
    );
    if !character.personality_traits.is_empty() {
        let traits: Vec<_> = character
            .personality_traits
            .iter()
            .map(|t| t.as_str())
            .collect();
        block.push_str(&format!("  Personality: {}\n", traits.join(", ")));
    }
    if !character.goals.is_empty() {
        block.push_str(&format!("  Goals: {}\n", character.goals.join(", ")));
    }
    if !character.flaws.is_empty() {
        block.push_str(&format!("  Flaws: {}\n", character.flaws.join(", ")));
    }
    block
}

fn style_block(options: &GenerationOptions) -> String {
    format!(
        "WRITING STYLE:\n- Perspective: {}\n- Tense: {}\n- Include dialogue: {}\n- Target length: {} words\n\n",
        options.narrative_perspective.as_str(),
        options.tense.as_str(),
        if options.include_dialogue { "Yes" } else { "No" },
        options.length.chapter_word_target()
    )
}

fn instructions(include_dialogue: bool) -> String {
    let dialogue = if include_dialogue {
        "Features natural dialogue that reveals character"
    } else {
        "Tells the scene through narration and action, without dialogue"
    };
    let items = [
        "Advances the plot according to the plot point description",
        "Develops the characters and their relationships",
        "Maintains the established tone and atmosphere",
        "Includes vivid descriptions of the setting",
        dialogue,
        "Builds toward the overall story themes",
        "Ends with appropriate tension or resolution for this plot point",
    ];

    let mut block = String::from("INSTRUCTIONS:\nWrite a compelling chapter that:\n");
    for (index, item) in items.iter().enumerate() {
        block.push_str(&format!("{}. {}\n", index + 1, item));
    }
    block.push('\n');
    block
}
