//! Journal entry types and the store seam for persisting them.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates::CalendarDay;
use crate::error::StoreError;

/// One persisted journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub user_id: String,
    /// Calendar day the entry belongs to (not the write timestamp).
    pub entry_date: CalendarDay,
    /// The prompt the user was journaling against.
    pub prompt: String,
    pub content: String,
    #[serde(default)]
    pub mood_tag: Option<String>,
    /// Placeholder summary until a real model lands.
    #[serde(default)]
    pub ai_summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    /// New entry with a fresh id and `created_at = now`.
    pub fn new(
        user_id: impl Into<String>,
        entry_date: CalendarDay,
        prompt: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            entry_date,
            prompt: prompt.into(),
            content: content.into(),
            mood_tag: None,
            ai_summary: None,
            created_at: Utc::now(),
        }
    }
}

/// Fields an update may change. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalEntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
}

/// Compact per-entry line for the weekly review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalDigest {
    pub entry_date: CalendarDay,
    #[serde(default)]
    pub ai_summary: Option<String>,
    #[serde(default)]
    pub mood_tag: Option<String>,
}

/// Persistence seam for journal entries.
#[async_trait]
pub trait JournalStore: Send + Sync {
    /// Most recent entries for a user, newest first, at most `limit`.
    async fn recent_entries(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<JournalEntry>, StoreError>;

    /// Persist a new entry and return it as stored.
    async fn create_entry(&self, entry: JournalEntry) -> Result<JournalEntry, StoreError>;

    /// Apply `changes` to an existing entry.
    async fn update_entry(
        &self,
        entry_id: Uuid,
        changes: JournalEntryUpdate,
    ) -> Result<(), StoreError>;

    /// Delete an entry.
    async fn delete_entry(&self, entry_id: Uuid) -> Result<(), StoreError>;

    /// Digest lines for the user's last 7 entries, newest first.
    async fn weekly_digest(&self, user_id: &str) -> Result<Vec<JournalDigest>, StoreError>;
}
