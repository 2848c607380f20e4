//! Enumerated story tags - genres, themes, traits, and setting descriptors
//!
//! Tags serialize to the same kebab-case names the story builder frontend
//! uses (`sci-fi`, `time-travel`, `magical-realm`, ...), and render with the
//! same text when interpolated into outline and prose templates.

use serde::{Deserialize, Serialize};

macro_rules! define_tag {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $tag:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $tag)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order
            #[cfg(test)]
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire name of this tag
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok($name::$variant),)+
                    other => Err(format!("Unknown {}: {}", stringify!($name), other)),
                }
            }
        }
    };
}

define_tag! {
    /// Story genre, taken from the primary setting
    Genre {
        Fantasy => "fantasy",
        SciFi => "sci-fi",
        Modern => "modern",
        Historical => "historical",
        PostApocalyptic => "post-apocalyptic",
        Mystery => "mystery",
        Romance => "romance",
        Horror => "horror",
        Comedy => "comedy",
        Adventure => "adventure",
        Thriller => "thriller",
        Western => "western",
    }
}

define_tag! {
    /// Thematic tag; the conflict lexicon is keyed by these
    ThemeTag {
        Betrayal => "betrayal",
        Friendship => "friendship",
        Love => "love",
        Revenge => "revenge",
        Redemption => "redemption",
        Sacrifice => "sacrifice",
        Power => "power",
        Freedom => "freedom",
        Justice => "justice",
        Survival => "survival",
        Discovery => "discovery",
        Transformation => "transformation",
        TimeTravel => "time-travel",
        Family => "family",
        Identity => "identity",
        ComingOfAge => "coming-of-age",
    }
}

define_tag! {
    PersonalityTrait {
        Brave => "brave",
        Cowardly => "cowardly",
        Intelligent => "intelligent",
        Naive => "naive",
        Kind => "kind",
        Cruel => "cruel",
        Ambitious => "ambitious",
        Lazy => "lazy",
        Honest => "honest",
        Deceptive => "deceptive",
        Loyal => "loyal",
        Treacherous => "treacherous",
        Optimistic => "optimistic",
        Pessimistic => "pessimistic",
        Creative => "creative",
        Practical => "practical",
    }
}

define_tag! {
    SettingType {
        Urban => "urban",
        Rural => "rural",
        Wilderness => "wilderness",
        Underground => "underground",
        Space => "space",
        Underwater => "underwater",
        MagicalRealm => "magical-realm",
        DystopianCity => "dystopian-city",
        SmallTown => "small-town",
        Castle => "castle",
        Spaceship => "spaceship",
        Desert => "desert",
        Forest => "forest",
        Mountain => "mountain",
        Island => "island",
    }
}

define_tag! {
    TimeOfDay {
        Dawn => "dawn",
        Morning => "morning",
        Noon => "noon",
        Afternoon => "afternoon",
        Evening => "evening",
        Night => "night",
        Midnight => "midnight",
    }
}

define_tag! {
    Season {
        Spring => "spring",
        Summer => "summer",
        Autumn => "autumn",
        Winter => "winter",
    }
}

define_tag! {
    /// Where a theme's central conflict plays out
    ConflictType {
        Internal => "internal",
        External => "external",
        Both => "both",
    }
}

define_tag! {
    Mood {
        Light => "light",
        Dark => "dark",
        Neutral => "neutral",
        Mixed => "mixed",
    }
}

define_tag! {
    /// A character's narrative role; exactly one per character
    CharacterRole {
        Protagonist => "protagonist",
        Antagonist => "antagonist",
        Supporting => "supporting",
        Minor => "minor",
    }
}

define_tag! {
    /// The dramatic function of a plot beat
    BeatType {
        Setup => "setup",
        IncitingIncident => "inciting-incident",
        PlotPoint => "plot-point",
        Midpoint => "midpoint",
        Crisis => "crisis",
        Climax => "climax",
        Resolution => "resolution",
    }
}

define_tag! {
    /// The dramatic shape an outline is built against
    StoryStructure {
        ThreeAct => "three-act",
        FiveAct => "five-act",
        HeroJourney => "hero-journey",
        FreytagPyramid => "freytag-pyramid",
    }
}

impl Default for StoryStructure {
    fn default() -> Self {
        Self::ThreeAct
    }
}
