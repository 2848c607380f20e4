//! Conflict and title lexicon - static phrase tables keyed by tag

use crate::domain::value_objects::{Genre, PersonalityTrait, ThemeTag};

/// Phrase pools describing how a theme's conflict plays out
#[derive(Debug, Clone, Copy)]
pub struct ConflictPattern {
    pub internal: &'static [&'static str],
    pub external: &'static [&'static str],
    pub resolution: &'static [&'static str],
}

/// Conflict pools for a primary theme tag
pub fn conflict_pattern(theme: ThemeTag) -> ConflictPattern {
    match theme {
        ThemeTag::Redemption => ConflictPattern {
            internal: &["guilt over past actions", "self-doubt", "fear of repeating mistakes"],
            external: &["society's judgment", "victims seeking revenge", "consequences of past"],
            resolution: &["making amends", "self-forgiveness", "proving change is real"],
        },
        ThemeTag::Betrayal => ConflictPattern {
            internal: &["trust issues", "desire for revenge", "questioning loyalty"],
            external: &["false friends", "hidden agendas", "broken alliances"],
            resolution: &["learning to trust again", "confronting the betrayer", "finding true allies"],
        },
        ThemeTag::Love => ConflictPattern {
            internal: &["fear of vulnerability", "past heartbreak", "self-worth issues"],
            external: &["social barriers", "rival suitors", "family opposition"],
            resolution: &["overcoming fears", "choosing love over safety", "sacrifice for beloved"],
        },
        ThemeTag::Power => ConflictPattern {
            internal: &["corruption temptation", "responsibility burden", "isolation"],
            external: &["political rivals", "rebellion", "power struggles"],
            resolution: &["learning restraint", "sharing power", "choosing service over dominance"],
        },
        ThemeTag::Survival => ConflictPattern {
            internal: &["despair", "moral compromises", "loss of humanity"],
            external: &["hostile environment", "resource scarcity", "predators"],
            resolution: &["finding hope", "maintaining humanity", "building community"],
        },
        ThemeTag::Discovery => ConflictPattern {
            internal: &["fear of truth", "cognitive dissonance", "identity crisis"],
            external: &["hidden knowledge", "cover-ups", "dangerous secrets"],
            resolution: &["accepting truth", "sharing knowledge", "transforming understanding"],
        },
        ThemeTag::Transformation => ConflictPattern {
            internal: &["resistance to change", "identity confusion", "fear of unknown"],
            external: &["external pressures", "catalytic events", "mentors/guides"],
            resolution: &["embracing change", "new identity", "helping others transform"],
        },
        ThemeTag::Sacrifice => ConflictPattern {
            internal: &["selfishness vs altruism", "fear of loss", "questioning worth"],
            external: &["impossible choices", "greater good demands", "loved ones in danger"],
            resolution: &["willing sacrifice", "finding meaning in loss", "inspiring others"],
        },
        ThemeTag::Freedom => ConflictPattern {
            internal: &["fear of responsibility", "comfort in chains", "self-limitation"],
            external: &["oppressive systems", "physical constraints", "social expectations"],
            resolution: &["breaking chains", "accepting responsibility", "helping others find freedom"],
        },
        ThemeTag::Justice => ConflictPattern {
            internal: &["moral ambiguity", "desire for revenge", "questioning right/wrong"],
            external: &["corrupt systems", "powerful villains", "legal obstacles"],
            resolution: &["upholding principles", "reforming systems", "mercy over vengeance"],
        },
        ThemeTag::Revenge => ConflictPattern {
            internal: &["consuming hatred", "moral degradation", "emptiness of vengeance"],
            external: &["elusive targets", "collateral damage", "cycle of violence"],
            resolution: &["choosing forgiveness", "breaking the cycle", "finding peace"],
        },
        ThemeTag::Friendship => ConflictPattern {
            internal: &["trust issues", "fear of abandonment", "loyalty conflicts"],
            external: &["external pressures", "misunderstandings", "competing loyalties"],
            resolution: &["deepening bonds", "mutual sacrifice", "unconditional support"],
        },
        ThemeTag::Family => ConflictPattern {
            internal: &["generational trauma", "identity vs heritage", "obligation vs desire"],
            external: &["family conflicts", "external threats", "social pressures"],
            resolution: &["healing relationships", "creating new traditions", "chosen family"],
        },
        ThemeTag::Identity => ConflictPattern {
            internal: &["self-doubt", "multiple selves", "authenticity struggles"],
            external: &["social expectations", "role conflicts", "identity theft/confusion"],
            resolution: &["self-acceptance", "authentic expression", "integrated identity"],
        },
        ThemeTag::ComingOfAge => ConflictPattern {
            internal: &["innocence vs experience", "responsibility fears", "identity formation"],
            external: &["adult challenges", "mentor relationships", "rites of passage"],
            resolution: &["accepting adulthood", "wisdom gained", "helping next generation"],
        },
        ThemeTag::TimeTravel => ConflictPattern {
            internal: &["regret over past", "anxiety about future", "temporal displacement"],
            external: &["paradoxes", "timeline conflicts", "temporal authorities"],
            resolution: &["accepting timeline", "learning from experience", "protecting history"],
        },
    }
}

/// Title nouns associated with a theme
pub fn theme_title_words(theme: ThemeTag) -> &'static [&'static str] {
    match theme {
        ThemeTag::Redemption => &["Redemption", "Second Chance", "Forgiveness"],
        ThemeTag::Betrayal => &["Betrayal", "Broken Trust", "False Friend"],
        ThemeTag::Love => &["Love", "Heart", "Devotion"],
        ThemeTag::Revenge => &["Vengeance", "Retribution", "Payback"],
        ThemeTag::Survival => &["Survival", "Last Stand", "Endurance"],
        ThemeTag::Discovery => &["Discovery", "Revelation", "Hidden Truth"],
        ThemeTag::Power => &["Power", "Crown", "Dominion"],
        ThemeTag::Freedom => &["Freedom", "Liberation", "Escape"],
        ThemeTag::Sacrifice => &["Sacrifice", "Price", "Cost"],
        ThemeTag::Transformation => &["Transformation", "Change", "Metamorphosis"],
        ThemeTag::Friendship => &["Friendship", "Bond", "Alliance"],
        ThemeTag::Family => &["Family", "Legacy", "Heritage"],
        ThemeTag::Identity => &["Identity", "Self", "Truth"],
        ThemeTag::Justice => &["Justice", "Balance", "Judgment"],
        ThemeTag::ComingOfAge => &["Journey", "Awakening", "Growth"],
        ThemeTag::TimeTravel => &["Time", "Destiny", "Paradox"],
    }
}

/// Title nouns associated with a genre
pub fn genre_title_words(genre: Genre) -> &'static [&'static str] {
    match genre {
        Genre::Fantasy => &["Realm", "Kingdom", "Magic", "Dragon", "Quest"],
        Genre::SciFi => &["Galaxy", "Star", "Future", "Cyber", "Nova"],
        Genre::Mystery => &["Shadow", "Secret", "Clue", "Mystery", "Case"],
        Genre::Horror => &["Darkness", "Fear", "Nightmare", "Terror", "Haunted"],
        Genre::Romance => &["Heart", "Love", "Passion", "Desire", "Soul"],
        Genre::Adventure => &["Adventure", "Quest", "Journey", "Expedition"],
        Genre::Thriller => &["Thriller", "Chase", "Hunt", "Race"],
        Genre::Western => &["Frontier", "Trail", "Range", "Territory"],
        Genre::Historical => &["Era", "Age", "Time", "Period"],
        Genre::Modern => &["City", "Life", "World", "Reality"],
        Genre::PostApocalyptic => &["Wasteland", "Ruins", "Ashes", "Remnant"],
        Genre::Comedy => &["Comedy", "Farce", "Jest", "Humor"],
    }
}

/// Title adjectives associated with a genre
pub fn genre_title_adjectives(genre: Genre) -> &'static [&'static str] {
    match genre {
        Genre::Fantasy => &["Enchanted", "Mystical", "Ancient", "Magical"],
        Genre::SciFi => &["Cosmic", "Stellar", "Quantum", "Cyber"],
        Genre::Mystery => &["Hidden", "Secret", "Mysterious", "Shadowy"],
        Genre::Horror => &["Dark", "Haunted", "Cursed", "Forbidden"],
        Genre::Romance => &["Passionate", "Tender", "Eternal", "Devoted"],
        Genre::Adventure => &["Epic", "Daring", "Bold", "Heroic"],
        Genre::Thriller => &["Deadly", "Dangerous", "Intense", "Urgent"],
        Genre::Western => &["Wild", "Lawless", "Rugged", "Untamed"],
        Genre::Historical => &["Ancient", "Noble", "Forgotten", "Lost"],
        Genre::Modern => &["Urban", "Contemporary", "Real", "Current"],
        Genre::PostApocalyptic => &["Broken", "Desolate", "Shattered", "Lost"],
        Genre::Comedy => &["Hilarious", "Absurd", "Witty", "Amusing"],
    }
}

/// How a character first reacts to a shock, by personality trait
pub fn shock_reactions(personality_trait: PersonalityTrait) -> Option<&'static [&'static str]> {
    let reactions: &[&str] = match personality_trait {
        PersonalityTrait::Brave => &[
            "to stand firm despite the chaos",
            "to face the situation head-on",
            "to protect others nearby",
        ],
        PersonalityTrait::Cowardly => &[
            "to step back in fear",
            "to look for an escape route",
            "to hide behind something solid",
        ],
        PersonalityTrait::Intelligent => &[
            "to analyze what was happening",
            "to look for logical explanations",
            "to assess the situation carefully",
        ],
        PersonalityTrait::Kind => &[
            "to worry about others who might be affected",
            "to check if anyone needed help",
            "to think of those they cared about",
        ],
        PersonalityTrait::Deceptive => &[
            "to consider how this might be used to their advantage",
            "to wonder who might be behind this",
            "to mask their true feelings",
        ],
        _ => return None,
    };
    Some(reactions)
}

/// Reaction used when no trait has an entry
pub const DEFAULT_SHOCK_REACTION: &str = "to freeze momentarily, unsure how to respond";

/// Dialogue pools for the three-line exchange appended to a chapter
pub mod dialogue {
    pub const OPENING: &[&str] = &[
        "I never expected things to turn out this way",
        "We need to talk about what happened",
        "There's something I need to tell you",
        "I'm not sure I can handle this alone",
    ];

    pub const RESPONSE: &[&str] = &[
        "I understand how you feel",
        "That's not what I expected to hear",
        "We'll figure this out together",
        "You're stronger than you think",
    ];

    pub const REACTION: &[&str] = &[
        "Thank you for believing in me",
        "I hope you're right about this",
        "I won't let you down",
        "Let's do what needs to be done",
    ];

    pub const BRAVE_OPENING: &str = "I'm ready to face whatever comes next";
    pub const DECEPTIVE_RESPONSE: &str = "Of course, you can trust me completely";

    pub const CLIMAX_CONFRONTATION: &[&str] = &[
        "This ends now. I won't let you hurt anyone else.",
        "I've come too far to back down now.",
        "You've taken everything from me, but you won't take my future.",
        "I'm not the same person who started this journey.",
        "Whatever happens next, I'm ready for it.",
    ];

    pub const CLIMAX_RESPONSE: &[&str] = &[
        "You think you've grown stronger? You're still the same weak fool.",
        "Your journey ends here, just as I always planned.",
        "You cannot stop what has already been set in motion.",
        "Strength? You know nothing of true power.",
        "This is where your story ends.",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_has_full_conflict_pools() {
        for theme in ThemeTag::ALL {
            let pattern = conflict_pattern(*theme);
            assert!(!pattern.internal.is_empty(), "{} internal", theme);
            assert!(!pattern.external.is_empty(), "{} external", theme);
            assert!(!pattern.resolution.is_empty(), "{} resolution", theme);
            assert!(!theme_title_words(*theme).is_empty());
        }
    }

    #[test]
    fn test_every_genre_has_title_words() {
        for genre in Genre::ALL {
            assert!(!genre_title_words(*genre).is_empty());
            assert!(!genre_title_adjectives(*genre).is_empty());
        }
        assert_eq!(genre_title_adjectives(Genre::Western)[1], "Lawless");
    }

    #[test]
    fn test_shock_reactions_only_for_listed_traits() {
        assert!(shock_reactions(PersonalityTrait::Brave).is_some());
        assert!(shock_reactions(PersonalityTrait::Lazy).is_none());
    }
}
