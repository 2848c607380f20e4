//! Dramatic structure templates
//!
//! Each template is an ordered list of acts. An act declares its relative
//! share of the story (shares sum to 1.0) and the beat types it must contain.

use crate::domain::value_objects::{BeatType, StoryStructure};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActTemplate {
    pub name: &'static str,
    pub share: f32,
    pub beats: &'static [BeatType],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructureTemplate {
    pub structure: StoryStructure,
    pub acts: &'static [ActTemplate],
}

impl StructureTemplate {
    pub fn beat_count(&self) -> usize {
        self.acts.iter().map(|act| act.beats.len()).sum()
    }
}

use BeatType::*;

const THREE_ACT: &[ActTemplate] = &[
    ActTemplate { name: "Setup", share: 0.25, beats: &[Setup, IncitingIncident, PlotPoint] },
    ActTemplate { name: "Confrontation", share: 0.5, beats: &[PlotPoint, Midpoint, Crisis] },
    ActTemplate { name: "Resolution", share: 0.25, beats: &[Climax, Resolution] },
];

const FIVE_ACT: &[ActTemplate] = &[
    ActTemplate { name: "Exposition", share: 0.15, beats: &[Setup] },
    ActTemplate { name: "Rising Action", share: 0.25, beats: &[IncitingIncident, PlotPoint] },
    ActTemplate { name: "Climax", share: 0.2, beats: &[Midpoint] },
    ActTemplate { name: "Falling Action", share: 0.25, beats: &[Crisis] },
    ActTemplate { name: "Resolution", share: 0.15, beats: &[Climax, Resolution] },
];

const HERO_JOURNEY: &[ActTemplate] = &[
    ActTemplate { name: "Departure", share: 0.3, beats: &[Setup, IncitingIncident] },
    ActTemplate { name: "Initiation", share: 0.4, beats: &[PlotPoint, Midpoint, Crisis] },
    ActTemplate { name: "Return", share: 0.3, beats: &[Climax, Resolution] },
];

const FREYTAG_PYRAMID: &[ActTemplate] = &[
    ActTemplate { name: "Exposition", share: 0.2, beats: &[Setup] },
    ActTemplate { name: "Rising Action", share: 0.3, beats: &[IncitingIncident, PlotPoint] },
    ActTemplate { name: "Climax", share: 0.2, beats: &[Midpoint, Climax] },
    ActTemplate { name: "Falling Action", share: 0.2, beats: &[Crisis] },
    ActTemplate { name: "Resolution", share: 0.1, beats: &[Resolution] },
];

/// The act template for a structure
pub fn structure_template(structure: StoryStructure) -> StructureTemplate {
    let acts = match structure {
        StoryStructure::ThreeAct => THREE_ACT,
        StoryStructure::FiveAct => FIVE_ACT,
        StoryStructure::HeroJourney => HERO_JOURNEY,
        StoryStructure::FreytagPyramid => FREYTAG_PYRAMID,
    };
    StructureTemplate { structure, acts }
}
