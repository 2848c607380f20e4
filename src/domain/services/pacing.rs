//! Word-count pacing allocation
//!
//! Splits a target word count across beats in proportion to beat weight.
//! The allocation is advisory: nothing downstream enforces it.

use std::collections::HashMap;

use crate::domain::entities::PlotBeat;
use crate::domain::value_objects::{BeatType, PlotBeatId};

/// Relative weight of a beat within the story
pub fn beat_weight(beat: &PlotBeat) -> f64 {
    let base = match beat.beat_type {
        BeatType::Climax => 2.0,
        BeatType::Midpoint | BeatType::Crisis => 1.5,
        BeatType::IncitingIncident => 1.3,
        _ => 1.0,
    };
    if beat.act == 2 {
        base * 1.2
    } else {
        base
    }
}

/// Per-beat word budget
///
/// Each beat receives `floor(target * weight / total_weight)`, so beats of
/// equal weight get equal shares and the sum stays within one word per beat
/// of the target.
pub fn allocate_word_counts(target_word_count: u32, beats: &[PlotBeat]) -> HashMap<PlotBeatId, u32> {
    let total_weight: f64 = beats.iter().map(beat_weight).sum();
    if total_weight <= 0.0 {
        return HashMap::new();
    }

    beats
        .iter()
        .map(|beat| {
            let share = f64::from(target_word_count) * beat_weight(beat) / total_weight;
            (beat.id, share.floor() as u32)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Character, Setting, Theme};
    use crate::domain::services::outline_generator::OutlineGenerator;
    use crate::domain::value_objects::{CharacterRole, Genre, SettingType, ThemeTag};

    fn eight_beats() -> Vec<PlotBeat> {
        OutlineGenerator::new()
            .fixed_beats(
                &[Character::new("Aria", CharacterRole::Protagonist)],
                &[Setting::new("Whispering Woods", Genre::Fantasy, SettingType::Forest)],
                &[Theme::new(ThemeTag::Redemption)],
            )
            .unwrap()
    }

    #[test]
    fn test_allocation_sums_within_beat_count_of_target() {
        let beats = eight_beats();
        for target in [2000u32, 5000, 10000, 7, 12345] {
            let allocation = allocate_word_counts(target, &beats);
            let total: u32 = allocation.values().sum();
            assert!(total <= target);
            assert!(target - total <= beats.len() as u32, "{} vs {}", total, target);
        }
    }

    #[test]
    fn test_climax_outweighs_setup() {
        let beats = eight_beats();
        let allocation = allocate_word_counts(5000, &beats);

        let setup = allocation[&beats[0].id];
        let climax = allocation[&beats[6].id];
        let crisis = allocation[&beats[5].id];
        assert!(climax > setup);
        // crisis sits in act 2: 1.5 * 1.2 = 1.8
        assert!(crisis < climax && crisis > setup);
    }

    #[test]
    fn test_equal_weights_get_equal_shares() {
        let beats = eight_beats();
        let allocation = allocate_word_counts(5000, &beats);
        // opening scene and first plot point are both act-1 beats of weight 1.0
        assert_eq!(allocation[&beats[0].id], allocation[&beats[2].id]);
    }

    #[test]
    fn test_empty_beats_allocate_nothing() {
        assert!(allocate_word_counts(5000, &[]).is_empty());
    }
}
