//! Ritual streak engine.
//!
//! A streak counts consecutive calendar days with at least one completed
//! ritual. The transition is keyed purely on the relation between today and
//! the stored `last_completed` date:
//!
//! - same day: no-op (completing twice never double-increments)
//! - yesterday: continuation, streak + 1
//! - anything else (gap of 2+ days, or never completed): reset to 1
//!
//! No "lapsed" state is stored. A broken streak keeps its stale value until
//! the next completion attempt, at which point it resets to 1. That lazy
//! reconciliation is intended behavior: the display path never recomputes,
//! so the user never sees an implicitly-decayed streak.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dates::{days_between, to_calendar_day, CalendarDay};
use crate::error::StoreError;
use crate::store::ProfileStore;

/// Preference key for the user's preferred visualization scene.
///
/// Keys are stored verbatim in the backend `preferences` JSON object, so the
/// wire spelling is part of the store contract.
pub const PREFERRED_SCENE_KEY: &str = "preferredSceneId";

/// Preference key for the coaching voice. Advisory only; never read by the
/// streak engine.
pub const PREFERRED_VOICE_KEY: &str = "preferredVoice";

/// Per-user ritual state as persisted by the profile store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserRitualState {
    /// Consecutive calendar days with a completed ritual.
    pub streak: u32,
    /// Most recent completion date, if any.
    pub last_completed: Option<CalendarDay>,
    /// Free-form JSON preferences (shallow-merged on update).
    #[serde(default)]
    pub preferences: Map<String, Value>,
}

/// How a completion attempt changed the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakTransition {
    /// Already completed today; state unchanged.
    AlreadyCompleted,
    /// Completed yesterday; streak incremented.
    Continued,
    /// Gap of 2+ days or first ever completion; streak reset to 1.
    Started,
}

/// Result of advancing the streak for one completion attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakUpdate {
    pub state: UserRitualState,
    pub transition: StreakTransition,
}

/// What the UI shows without recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakDisplay {
    pub streak: u32,
    pub completed_today: bool,
}

/// Pure streak transition for a completion on `today`.
pub fn advance_streak(prior: &UserRitualState, today: CalendarDay) -> StreakUpdate {
    match prior.last_completed {
        Some(last) if last == today => StreakUpdate {
            state: prior.clone(),
            transition: StreakTransition::AlreadyCompleted,
        },
        Some(last) if days_between(today, last) == 1 => StreakUpdate {
            state: UserRitualState {
                streak: prior.streak + 1,
                last_completed: Some(today),
                preferences: prior.preferences.clone(),
            },
            transition: StreakTransition::Continued,
        },
        _ => StreakUpdate {
            state: UserRitualState {
                streak: 1,
                last_completed: Some(today),
                preferences: prior.preferences.clone(),
            },
            transition: StreakTransition::Started,
        },
    }
}

/// Pure display projection: the stored streak as-is, plus whether today's
/// ritual is already done.
pub fn streak_display(prior: &UserRitualState, today: CalendarDay) -> StreakDisplay {
    StreakDisplay {
        streak: prior.streak,
        completed_today: prior.last_completed == Some(today),
    }
}

/// Streak engine bound to a profile store.
///
/// Each operation does at most one load and one save; a failed save leaves
/// the stored state untouched and surfaces the [`StoreError`] unchanged.
pub struct RitualEngine<S: ProfileStore> {
    store: S,
}

impl<S: ProfileStore> RitualEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record a ritual completion at instant `now`.
    ///
    /// Loads prior state (a missing record counts as the zero state),
    /// applies [`advance_streak`], and persists the result. The no-op case
    /// skips the write entirely: state is mutated at most once per calendar
    /// day.
    pub async fn complete_ritual<Tz: chrono::TimeZone>(
        &self,
        user_id: &str,
        now: &chrono::DateTime<Tz>,
    ) -> Result<StreakUpdate, StoreError> {
        let today = to_calendar_day(now);
        let prior = self
            .store
            .load_state(user_id)
            .await?
            .unwrap_or_default();
        let update = advance_streak(&prior, today);
        if update.transition != StreakTransition::AlreadyCompleted {
            self.store.save_state(user_id, &update.state).await?;
        }
        Ok(update)
    }

    /// Load the stored state and project it for display.
    pub async fn streak_display<Tz: chrono::TimeZone>(
        &self,
        user_id: &str,
        now: &chrono::DateTime<Tz>,
    ) -> Result<StreakDisplay, StoreError> {
        let state = self
            .store
            .load_state(user_id)
            .await?
            .unwrap_or_default();
        Ok(streak_display(&state, to_calendar_day(now)))
    }

    /// Shallow-merge `partial` into the stored preferences.
    ///
    /// Independent of the streak path; returns the merged map.
    pub async fn update_preferences(
        &self,
        user_id: &str,
        partial: Map<String, Value>,
    ) -> Result<Map<String, Value>, StoreError> {
        self.store.update_preferences(user_id, partial).await
    }
}

/// Shallow merge of `partial` into `base`: keys in `partial` win, keys absent
/// from `partial` are preserved.
pub fn merge_preferences(
    base: &Map<String, Value>,
    partial: Map<String, Value>,
) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, value) in partial {
        merged.insert(key, value);
    }
    merged
}

/// Convenience for building a preferences map from string pairs.
pub fn preferences_from_pairs<I, K, V>(pairs: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut map = Map::new();
    for (key, value) in pairs {
        map.insert(key.into(), Value::String(value.into()));
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn day(s: &str) -> CalendarDay {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn state(streak: u32, last: Option<&str>) -> UserRitualState {
        UserRitualState {
            streak,
            last_completed: last.map(day),
            preferences: Map::new(),
        }
    }

    #[test]
    fn same_day_completion_is_idempotent() {
        let prior = state(5, Some("2024-03-11"));
        let update = advance_streak(&prior, day("2024-03-11"));
        assert_eq!(update.transition, StreakTransition::AlreadyCompleted);
        assert_eq!(update.state, prior);
    }

    #[test]
    fn yesterday_continues_the_streak() {
        let prior = state(5, Some("2024-03-10"));
        let update = advance_streak(&prior, day("2024-03-11"));
        assert_eq!(update.transition, StreakTransition::Continued);
        assert_eq!(update.state.streak, 6);
        assert_eq!(update.state.last_completed, Some(day("2024-03-11")));
    }

    #[test]
    fn two_day_gap_resets_to_one() {
        let prior = state(5, Some("2024-03-08"));
        let update = advance_streak(&prior, day("2024-03-11"));
        assert_eq!(update.transition, StreakTransition::Started);
        assert_eq!(update.state.streak, 1);
        assert_eq!(update.state.last_completed, Some(day("2024-03-11")));
    }

    #[test]
    fn first_ever_completion_starts_at_one() {
        let prior = state(0, None);
        let update = advance_streak(&prior, day("2024-03-11"));
        assert_eq!(update.transition, StreakTransition::Started);
        assert_eq!(update.state.streak, 1);
    }

    #[test]
    fn stale_streak_is_displayed_as_stored() {
        // Lazy decay: a broken streak keeps its stored value until the next
        // completion; the display path never zeroes it.
        let prior = state(7, Some("2024-03-01"));
        let display = streak_display(&prior, day("2024-03-11"));
        assert_eq!(display.streak, 7);
        assert!(!display.completed_today);
    }

    #[test]
    fn display_flags_completed_today() {
        let prior = state(3, Some("2024-03-11"));
        let display = streak_display(&prior, day("2024-03-11"));
        assert_eq!(display.streak, 3);
        assert!(display.completed_today);
    }

    #[test]
    fn completion_preserves_preferences() {
        let mut prior = state(2, Some("2024-03-10"));
        prior.preferences.insert(
            PREFERRED_SCENE_KEY.to_string(),
            Value::String("2".to_string()),
        );
        let update = advance_streak(&prior, day("2024-03-11"));
        assert_eq!(
            update.state.preferences.get(PREFERRED_SCENE_KEY),
            Some(&Value::String("2".to_string()))
        );
    }

    #[test]
    fn merge_preferences_is_shallow() {
        let base = preferences_from_pairs([
            (PREFERRED_SCENE_KEY, "1"),
            (PREFERRED_VOICE_KEY, "calm"),
        ]);
        let partial = preferences_from_pairs([(PREFERRED_SCENE_KEY, "3")]);
        let merged = merge_preferences(&base, partial);
        assert_eq!(
            merged.get(PREFERRED_SCENE_KEY),
            Some(&Value::String("3".to_string()))
        );
        assert_eq!(
            merged.get(PREFERRED_VOICE_KEY),
            Some(&Value::String("calm".to_string()))
        );
    }

    proptest! {
        #[test]
        fn gap_of_two_or_more_always_resets(streak in 0u32..10_000, gap in 2i64..5_000) {
            let today = day("2024-03-11");
            let last = today - chrono::Duration::days(gap);
            let prior = UserRitualState {
                streak,
                last_completed: Some(last),
                preferences: Map::new(),
            };
            let update = advance_streak(&prior, today);
            prop_assert_eq!(update.transition, StreakTransition::Started);
            prop_assert_eq!(update.state.streak, 1);
        }

        #[test]
        fn gap_of_one_always_increments(streak in 0u32..10_000) {
            let today = day("2024-03-11");
            let prior = UserRitualState {
                streak,
                last_completed: Some(today - chrono::Duration::days(1)),
                preferences: Map::new(),
            };
            let update = advance_streak(&prior, today);
            prop_assert_eq!(update.transition, StreakTransition::Continued);
            prop_assert_eq!(update.state.streak, streak + 1);
        }

        #[test]
        fn same_day_never_changes_state(streak in 0u32..10_000) {
            let today = day("2024-03-11");
            let prior = UserRitualState {
                streak,
                last_completed: Some(today),
                preferences: Map::new(),
            };
            let update = advance_streak(&prior, today);
            prop_assert_eq!(update.transition, StreakTransition::AlreadyCompleted);
            prop_assert_eq!(update.state, prior);
        }
    }
}
