//! Daily content selection.
//!
//! Two kinds of selection live here: deterministic picks keyed on the
//! calendar (today's affirmation) and shuffle-style random picks (refresh
//! affirmation, streak-tiered journal prompt, fallback scene). Random picks
//! go through [`ContentPicker`], which owns a seedable PCG generator so tests
//! can reproduce exact sequences.

use chrono::{DateTime, TimeZone};
use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use serde_json::{Map, Value};

use crate::catalog::{
    AffirmationCategory, AffirmationEntry, Catalogs, JournalPromptTemplate, PromptTier,
    VisualizationScene,
};
use crate::dates::day_of_year;
use crate::error::ConfigError;
use crate::ritual::PREFERRED_SCENE_KEY;

/// Today's affirmation: `day_of_year mod catalog length`.
///
/// Deterministic within one calendar day and cycles with period equal to the
/// catalog length as the day of year advances.
pub fn affirmation_of_the_day<'a, Tz: TimeZone>(
    now: &DateTime<Tz>,
    catalog: &'a [AffirmationEntry],
) -> &'a AffirmationEntry {
    let index = (day_of_year(now) as usize) % catalog.len();
    &catalog[index]
}

/// Stable filter of the catalog by category, preserving catalog order.
pub fn affirmations_by_category(
    catalog: &[AffirmationEntry],
    category: AffirmationCategory,
) -> Vec<&AffirmationEntry> {
    catalog.iter().filter(|a| a.category == category).collect()
}

/// Random content selection with an injectable seed.
pub struct ContentPicker {
    rng: Mcg128Xsl64,
}

impl ContentPicker {
    /// Picker seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mcg128Xsl64::from_entropy(),
        }
    }

    /// Picker with a fixed seed for reproducible sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mcg128Xsl64::seed_from_u64(seed),
        }
    }

    /// Uniform random affirmation, for the user-facing shuffle affordance.
    pub fn random_affirmation<'a>(&mut self, catalog: &'a [AffirmationEntry]) -> &'a AffirmationEntry {
        &catalog[self.rng.gen_range(0..catalog.len())]
    }

    /// Render a journal prompt for the given streak.
    ///
    /// Picks uniformly from the templates of the tier matching `streak`
    /// (boundaries at 3 and 10), then substitutes every declared `{{name}}`
    /// placeholder with a uniform pick from that variable's value list.
    ///
    /// # Errors
    /// [`ConfigError::UnregisteredVariable`] if a template declares a
    /// variable with no value list. Catalog validation catches this at
    /// startup; hitting it here means validation was skipped.
    pub fn prompt_for_streak(
        &mut self,
        streak: u32,
        catalogs: &Catalogs,
    ) -> Result<String, ConfigError> {
        let tier = PromptTier::for_streak(streak);
        let pool = catalogs.prompts_for_tier(tier);
        if pool.is_empty() {
            return Err(ConfigError::EmptyCatalog(format!("prompts ({tier})")));
        }
        let template = pool[self.rng.gen_range(0..pool.len())];
        self.render_template(template, catalogs)
    }

    /// The user's preferred scene when set and resolvable, else a uniform
    /// random one.
    pub fn preferred_or_random_scene<'a>(
        &mut self,
        preferences: &Map<String, Value>,
        catalogs: &'a Catalogs,
    ) -> &'a VisualizationScene {
        if let Some(Value::String(id)) = preferences.get(PREFERRED_SCENE_KEY) {
            if let Some(scene) = catalogs.scene_by_id(id) {
                return scene;
            }
        }
        let scenes = catalogs.scenes();
        &scenes[self.rng.gen_range(0..scenes.len())]
    }

    fn render_template(
        &mut self,
        template: &JournalPromptTemplate,
        catalogs: &Catalogs,
    ) -> Result<String, ConfigError> {
        let mut text = template.text.clone();
        for variable in &template.variables {
            let values = catalogs.variable_values(variable).ok_or_else(|| {
                ConfigError::UnregisteredVariable {
                    template: template.id.clone(),
                    variable: variable.clone(),
                }
            })?;
            let value = &values[self.rng.gen_range(0..values.len())];
            text = text.replace(&format!("{{{{{variable}}}}}"), value);
        }
        Ok(text)
    }
}

impl Default for ContentPicker {
    fn default() -> Self {
        Self::new()
    }
}
