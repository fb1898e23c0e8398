//! Built-in journal prompt templates and variable value lists.
//!
//! Template text uses `{{name}}` placeholders. Each template carries the
//! streak tier it belongs to, so the three tier subsets stay disjoint by
//! construction.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Streak tier a prompt template belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptTier {
    Novice,
    Intermediate,
    Advanced,
}

impl PromptTier {
    /// Tier for a given streak. Boundaries at 3 and 10 days.
    pub fn for_streak(streak: u32) -> Self {
        if streak < 3 {
            PromptTier::Novice
        } else if streak < 10 {
            PromptTier::Intermediate
        } else {
            PromptTier::Advanced
        }
    }
}

impl fmt::Display for PromptTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PromptTier::Novice => "novice",
            PromptTier::Intermediate => "intermediate",
            PromptTier::Advanced => "advanced",
        };
        f.write_str(name)
    }
}

/// One journal prompt template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalPromptTemplate {
    pub id: String,
    /// Template text with zero or more `{{name}}` placeholders.
    pub text: String,
    pub tier: PromptTier,
    /// Variable names the text references.
    pub variables: Vec<String>,
}

fn template(id: &str, text: &str, tier: PromptTier, variables: &[&str]) -> JournalPromptTemplate {
    JournalPromptTemplate {
        id: id.to_string(),
        text: text.to_string(),
        tier,
        variables: variables.iter().map(|v| v.to_string()).collect(),
    }
}

/// The built-in prompt template list.
pub fn builtin_prompts() -> Vec<JournalPromptTemplate> {
    use PromptTier::*;
    vec![
        template(
            "wealth_identity",
            "How does someone with a net worth of ${{amount}} think and act differently than you do now?",
            Advanced,
            &["amount"],
        ),
        template(
            "gratitude",
            "List three financial blessings in your life today, no matter how small.",
            Novice,
            &[],
        ),
        template(
            "habits",
            "What is one wealth habit you want to develop in the next {{timeframe}}?",
            Intermediate,
            &["timeframe"],
        ),
        template(
            "belief",
            "What limiting belief about money did you inherit from your family, and how can you reframe it?",
            Advanced,
            &[],
        ),
        template(
            "vision",
            "Describe your ideal financial situation {{timeframe}} from now in vivid detail.",
            Novice,
            &["timeframe"],
        ),
        template(
            "values",
            "How do your current spending habits align (or not align) with your core values?",
            Intermediate,
            &[],
        ),
        template(
            "mindset",
            "In what situations do you find yourself thinking from scarcity rather than abundance?",
            Advanced,
            &[],
        ),
        template(
            "goal",
            "What is your next significant financial goal, and what specific steps will you take to achieve it?",
            Intermediate,
            &[],
        ),
    ]
}

/// The built-in variable value lists, keyed by variable name.
pub fn builtin_variable_values() -> HashMap<String, Vec<String>> {
    let mut values = HashMap::new();
    values.insert(
        "timeframe".to_string(),
        ["30 days", "3 months", "1 year", "5 years", "10 years"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    values.insert(
        "amount".to_string(),
        ["250,000", "1 million", "5 million", "10 million", "100 million"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(PromptTier::for_streak(0), PromptTier::Novice);
        assert_eq!(PromptTier::for_streak(2), PromptTier::Novice);
        assert_eq!(PromptTier::for_streak(3), PromptTier::Intermediate);
        assert_eq!(PromptTier::for_streak(9), PromptTier::Intermediate);
        assert_eq!(PromptTier::for_streak(10), PromptTier::Advanced);
        assert_eq!(PromptTier::for_streak(365), PromptTier::Advanced);
    }

    #[test]
    fn declared_variables_appear_in_text() {
        for template in builtin_prompts() {
            for variable in &template.variables {
                let marker = format!("{{{{{variable}}}}}");
                assert!(
                    template.text.contains(&marker),
                    "template '{}' missing marker {marker}",
                    template.id
                );
            }
        }
    }
}
