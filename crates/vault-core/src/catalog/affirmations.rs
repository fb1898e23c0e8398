//! Built-in wealth affirmation catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Thematic category of an affirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AffirmationCategory {
    SelfWorth,
    Abundance,
    Empowerment,
    Attraction,
    Growth,
    Opportunity,
    Confidence,
    Income,
    Mindset,
    Capability,
    Resilience,
    Identity,
    Creation,
}

impl fmt::Display for AffirmationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AffirmationCategory::SelfWorth => "self-worth",
            AffirmationCategory::Abundance => "abundance",
            AffirmationCategory::Empowerment => "empowerment",
            AffirmationCategory::Attraction => "attraction",
            AffirmationCategory::Growth => "growth",
            AffirmationCategory::Opportunity => "opportunity",
            AffirmationCategory::Confidence => "confidence",
            AffirmationCategory::Income => "income",
            AffirmationCategory::Mindset => "mindset",
            AffirmationCategory::Capability => "capability",
            AffirmationCategory::Resilience => "resilience",
            AffirmationCategory::Identity => "identity",
            AffirmationCategory::Creation => "creation",
        };
        f.write_str(name)
    }
}

/// One entry in the affirmation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffirmationEntry {
    pub id: String,
    pub text: String,
    pub category: AffirmationCategory,
}

fn entry(id: &str, text: &str, category: AffirmationCategory) -> AffirmationEntry {
    AffirmationEntry {
        id: id.to_string(),
        text: text.to_string(),
        category,
    }
}

/// The built-in daily affirmation list, in catalog order.
pub fn builtin_affirmations() -> Vec<AffirmationEntry> {
    use AffirmationCategory::*;
    vec![
        entry("1", "I am worthy of financial abundance and prosperity.", SelfWorth),
        entry("2", "Money flows to me easily and effortlessly.", Abundance),
        entry("3", "I make decisions from a place of financial empowerment.", Empowerment),
        entry("4", "I attract wealth through my actions and mindset.", Attraction),
        entry("5", "My relationship with money improves every day.", Growth),
        entry("6", "I am a magnet for financial opportunities.", Opportunity),
        entry("7", "I invest in myself and my future with confidence.", Confidence),
        entry(
            "8",
            "My income increases steadily, regardless of external circumstances.",
            Income,
        ),
        entry("9", "I release all limiting beliefs about money.", Mindset),
        entry("10", "I am capable of creating lasting wealth.", Capability),
        entry("11", "Every dollar I spend returns to me multiplied.", Abundance),
        entry("12", "My financial intelligence grows daily.", Growth),
        entry(
            "13",
            "I transform my financial challenges into opportunities.",
            Resilience,
        ),
        entry(
            "14",
            "My wealth identity strengthens with every choice I make.",
            Identity,
        ),
        entry("15", "I am the creator of my financial reality.", Creation),
    ]
}
