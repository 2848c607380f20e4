//! Domain layer - Core story generation logic with no I/O
//!
//! This layer contains:
//! - Entities: Character, Setting, Theme, PlotBeat, StoryOutline, Story
//! - Value Objects: tags, identifiers, generation options, provider config
//! - Domain Services: lexicon data, outline generation, pacing, prose synthesis

pub mod entities;
pub mod services;
pub mod value_objects;
