//! Profile store adapters.
//!
//! The streak engine talks to storage through [`ProfileStore`]; journal
//! entries go through [`crate::journal::JournalStore`]. Two adapters are
//! provided: an in-memory store for tests and offline use, and a Supabase
//! (PostgREST) client matching the hosted backend.

pub mod memory;
pub mod supabase;

pub use memory::MemoryStore;
pub use supabase::{SupabaseConfig, SupabaseStore};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::ritual::UserRitualState;

/// Persistence seam for per-user ritual state.
///
/// A missing record is a normal initial condition, reported as `Ok(None)`,
/// never as an error.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Load a user's ritual state. `None` means no record exists yet.
    async fn load_state(&self, user_id: &str) -> Result<Option<UserRitualState>, StoreError>;

    /// Persist a user's ritual state, creating the record if needed.
    async fn save_state(&self, user_id: &str, state: &UserRitualState) -> Result<(), StoreError>;

    /// Shallow-merge `partial` into the stored preferences, persist, and
    /// return the merged map. Keys absent from `partial` are preserved.
    async fn update_preferences(
        &self,
        user_id: &str,
        partial: Map<String, Value>,
    ) -> Result<Map<String, Value>, StoreError>;
}
