//! In-memory store for tests and offline development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::StoreError;
use crate::journal::{JournalDigest, JournalEntry, JournalEntryUpdate, JournalStore};
use crate::ritual::{merge_preferences, UserRitualState};
use crate::store::ProfileStore;

/// In-memory implementation of [`ProfileStore`] and [`JournalStore`].
///
/// Backed by mutexed maps; locks are held only across synchronous sections,
/// never across an await point.
#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: Mutex<HashMap<String, UserRitualState>>,
    entries: Mutex<Vec<JournalEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a profile, replacing any existing record. Test helper.
    pub fn put_profile(&self, user_id: impl Into<String>, state: UserRitualState) {
        self.profiles.lock().unwrap().insert(user_id.into(), state);
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn load_state(&self, user_id: &str) -> Result<Option<UserRitualState>, StoreError> {
        Ok(self.profiles.lock().unwrap().get(user_id).cloned())
    }

    async fn save_state(&self, user_id: &str, state: &UserRitualState) -> Result<(), StoreError> {
        self.profiles
            .lock()
            .unwrap()
            .insert(user_id.to_string(), state.clone());
        Ok(())
    }

    async fn update_preferences(
        &self,
        user_id: &str,
        partial: Map<String, Value>,
    ) -> Result<Map<String, Value>, StoreError> {
        let mut profiles = self.profiles.lock().unwrap();
        let state = profiles.entry(user_id.to_string()).or_default();
        state.preferences = merge_preferences(&state.preferences, partial);
        Ok(state.preferences.clone())
    }
}

#[async_trait]
impl JournalStore for MemoryStore {
    async fn recent_entries(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<JournalEntry>, StoreError> {
        let entries = self.entries.lock().unwrap();
        let mut matching: Vec<JournalEntry> = entries
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.entry_date.cmp(&a.entry_date));
        matching.truncate(limit);
        Ok(matching)
    }

    async fn create_entry(&self, entry: JournalEntry) -> Result<JournalEntry, StoreError> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn update_entry(
        &self,
        entry_id: Uuid,
        changes: JournalEntryUpdate,
    ) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .iter_mut()
            .find(|e| e.id == entry_id)
            .ok_or_else(|| StoreError::InvalidRecord(format!("no entry with id {entry_id}")))?;
        if let Some(content) = changes.content {
            entry.content = content;
        }
        if let Some(mood_tag) = changes.mood_tag {
            entry.mood_tag = Some(mood_tag);
        }
        if let Some(ai_summary) = changes.ai_summary {
            entry.ai_summary = Some(ai_summary);
        }
        Ok(())
    }

    async fn delete_entry(&self, entry_id: Uuid) -> Result<(), StoreError> {
        self.entries.lock().unwrap().retain(|e| e.id != entry_id);
        Ok(())
    }

    async fn weekly_digest(&self, user_id: &str) -> Result<Vec<JournalDigest>, StoreError> {
        let recent = self.recent_entries(user_id, 7).await?;
        Ok(recent
            .into_iter()
            .map(|e| JournalDigest {
                entry_date: e.entry_date,
                ai_summary: e.ai_summary,
                mood_tag: e.mood_tag,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn load_returns_none_for_unknown_user() {
        let store = MemoryStore::new();
        assert_eq!(store.load_state("nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_then_load_roundtrips() {
        let store = MemoryStore::new();
        let state = UserRitualState {
            streak: 4,
            last_completed: Some(day("2024-03-11")),
            preferences: Map::new(),
        };
        store.save_state("u1", &state).await.unwrap();
        assert_eq!(store.load_state("u1").await.unwrap(), Some(state));
    }

    #[tokio::test]
    async fn update_preferences_creates_missing_profile() {
        let store = MemoryStore::new();
        let merged = store
            .update_preferences(
                "u1",
                crate::ritual::preferences_from_pairs([("preferredSceneId", "3")]),
            )
            .await
            .unwrap();
        assert_eq!(merged.get("preferredSceneId").unwrap(), "3");
        let state = store.load_state("u1").await.unwrap().unwrap();
        assert_eq!(state.streak, 0);
    }

    #[tokio::test]
    async fn recent_entries_newest_first_with_limit() {
        let store = MemoryStore::new();
        for d in ["2024-03-08", "2024-03-10", "2024-03-09"] {
            store
                .create_entry(JournalEntry::new("u1", day(d), "prompt", "text"))
                .await
                .unwrap();
        }
        store
            .create_entry(JournalEntry::new("u2", day("2024-03-11"), "p", "t"))
            .await
            .unwrap();

        let entries = store.recent_entries("u1", 2).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entry_date, day("2024-03-10"));
        assert_eq!(entries[1].entry_date, day("2024-03-09"));
    }

    #[tokio::test]
    async fn update_and_delete_entry() {
        let store = MemoryStore::new();
        let entry = store
            .create_entry(JournalEntry::new("u1", day("2024-03-10"), "p", "draft"))
            .await
            .unwrap();

        store
            .update_entry(
                entry.id,
                JournalEntryUpdate {
                    content: Some("final".to_string()),
                    mood_tag: Some("hopeful".to_string()),
                    ai_summary: None,
                },
            )
            .await
            .unwrap();

        let stored = &store.recent_entries("u1", 10).await.unwrap()[0];
        assert_eq!(stored.content, "final");
        assert_eq!(stored.mood_tag.as_deref(), Some("hopeful"));
        assert_eq!(stored.ai_summary, None);

        store.delete_entry(entry.id).await.unwrap();
        assert!(store.recent_entries("u1", 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn weekly_digest_caps_at_seven() {
        let store = MemoryStore::new();
        for i in 1..=9 {
            store
                .create_entry(JournalEntry::new(
                    "u1",
                    day(&format!("2024-03-{i:02}")),
                    "p",
                    "t",
                ))
                .await
                .unwrap();
        }
        let digest = store.weekly_digest("u1").await.unwrap();
        assert_eq!(digest.len(), 7);
        assert_eq!(digest[0].entry_date, day("2024-03-09"));
    }
}
