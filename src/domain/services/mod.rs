//! Domain services - Pure generation logic over domain entities

pub mod lexicon;
pub mod outline_generator;
pub mod pacing;
pub mod phrase_chooser;
pub mod prose;
pub mod structure_templates;

pub use outline_generator::{
    chapter_titles, estimate_reading_time, generate_character_arc, generate_dialogue_prompts,
    OutlineError, OutlineGenerator, OutlineRequest,
};
pub use pacing::allocate_word_counts;
pub use phrase_chooser::{PhraseChooser, RngChooser};

#[cfg(test)]
pub use phrase_chooser::FixedChooser;
