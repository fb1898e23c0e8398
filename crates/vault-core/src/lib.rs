//! # Vault Core Library
//!
//! This library provides the core logic for Vault, a daily wealth-identity
//! ritual tracker. It implements a library-first philosophy: all operations
//! are available to any host (CLI, mobile shell) over the same core, with
//! presentation layers kept thin.
//!
//! ## Architecture
//!
//! - **Streak Engine**: a pure calendar-day state machine; lapse is inferred
//!   lazily at the next completion attempt, never stored
//! - **Content Selectors**: deterministic "of the day" picks plus seedable
//!   random selection over static catalogs
//! - **Catalogs**: immutable affirmation/prompt/scene lists validated at
//!   startup
//! - **Store**: async profile and journal persistence behind traits, with
//!   Supabase (PostgREST) and in-memory adapters
//!
//! ## Key Components
//!
//! - [`RitualEngine`]: streak state machine bound to a store
//! - [`ContentPicker`]: random content selection with an injectable seed
//! - [`Catalogs`]: the validated static content set
//! - [`ProfileStore`] / [`JournalStore`]: persistence seams

pub mod catalog;
pub mod coach;
pub mod config;
pub mod content;
pub mod dates;
pub mod error;
pub mod journal;
pub mod ritual;
pub mod store;

pub use catalog::{
    AffirmationCategory, AffirmationEntry, Catalogs, JournalPromptTemplate, PromptTier,
    VisualizationScene,
};
pub use config::Config;
pub use content::{affirmation_of_the_day, affirmations_by_category, ContentPicker};
pub use dates::CalendarDay;
pub use error::{ConfigError, CoreError, Result, StoreError};
pub use journal::{JournalDigest, JournalEntry, JournalEntryUpdate, JournalStore};
pub use ritual::{
    advance_streak, streak_display, RitualEngine, StreakDisplay, StreakTransition, StreakUpdate,
    UserRitualState, PREFERRED_SCENE_KEY, PREFERRED_VOICE_KEY,
};
pub use store::{MemoryStore, ProfileStore, SupabaseConfig, SupabaseStore};
