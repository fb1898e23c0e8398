//! Static content catalogs: affirmations, journal prompt templates, and
//! visualization scenes.
//!
//! All three catalogs are process-wide constants: built once at startup,
//! validated, and never mutated. Validation failures are authoring bugs
//! surfaced as [`ConfigError`] before any selector runs.

mod affirmations;
mod prompts;
mod scenes;

pub use affirmations::{builtin_affirmations, AffirmationCategory, AffirmationEntry};
pub use prompts::{
    builtin_prompts, builtin_variable_values, JournalPromptTemplate, PromptTier,
};
pub use scenes::{builtin_scenes, VisualizationScene};

use std::collections::{HashMap, HashSet};

use crate::error::ConfigError;

/// The full set of static catalogs plus the variable value lists used for
/// prompt template substitution.
#[derive(Debug, Clone)]
pub struct Catalogs {
    affirmations: Vec<AffirmationEntry>,
    prompts: Vec<JournalPromptTemplate>,
    scenes: Vec<VisualizationScene>,
    variable_values: HashMap<String, Vec<String>>,
}

impl Catalogs {
    /// Assemble and validate a catalog set.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if any catalog is empty, a prompt tier has
    /// no templates, ids collide, or a template declares a variable with no
    /// registered value list.
    pub fn new(
        affirmations: Vec<AffirmationEntry>,
        prompts: Vec<JournalPromptTemplate>,
        scenes: Vec<VisualizationScene>,
        variable_values: HashMap<String, Vec<String>>,
    ) -> Result<Self, ConfigError> {
        let catalogs = Self {
            affirmations,
            prompts,
            scenes,
            variable_values,
        };
        catalogs.validate()?;
        Ok(catalogs)
    }

    /// The built-in catalog set shipped with the application.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::new(
            builtin_affirmations(),
            builtin_prompts(),
            builtin_scenes(),
            builtin_variable_values(),
        )
    }

    pub fn affirmations(&self) -> &[AffirmationEntry] {
        &self.affirmations
    }

    pub fn prompts(&self) -> &[JournalPromptTemplate] {
        &self.prompts
    }

    pub fn scenes(&self) -> &[VisualizationScene] {
        &self.scenes
    }

    /// Registered values for a template variable, if any.
    pub fn variable_values(&self, name: &str) -> Option<&[String]> {
        self.variable_values.get(name).map(Vec::as_slice)
    }

    /// Look up a scene by id.
    pub fn scene_by_id(&self, id: &str) -> Option<&VisualizationScene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    /// Prompt templates belonging to one streak tier, in catalog order.
    pub fn prompts_for_tier(&self, tier: PromptTier) -> Vec<&JournalPromptTemplate> {
        self.prompts.iter().filter(|t| t.tier == tier).collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.affirmations.is_empty() {
            return Err(ConfigError::EmptyCatalog("affirmations".to_string()));
        }
        if self.scenes.is_empty() {
            return Err(ConfigError::EmptyCatalog("scenes".to_string()));
        }
        for tier in [
            PromptTier::Novice,
            PromptTier::Intermediate,
            PromptTier::Advanced,
        ] {
            if self.prompts_for_tier(tier).is_empty() {
                return Err(ConfigError::EmptyCatalog(format!("prompts ({tier})")));
            }
        }

        check_unique_ids("affirmations", self.affirmations.iter().map(|a| &a.id))?;
        check_unique_ids("prompts", self.prompts.iter().map(|t| &t.id))?;
        check_unique_ids("scenes", self.scenes.iter().map(|s| &s.id))?;

        for template in &self.prompts {
            for variable in &template.variables {
                if !self.variable_values.contains_key(variable) {
                    return Err(ConfigError::UnregisteredVariable {
                        template: template.id.clone(),
                        variable: variable.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn check_unique_ids<'a>(
    catalog: &str,
    ids: impl Iterator<Item = &'a String>,
) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ConfigError::DuplicateId {
                catalog: catalog.to_string(),
                id: id.clone(),
            });
        }
    }
    Ok(())
}
