//! Supabase (PostgREST) store adapter.
//!
//! Talks to the hosted backend's REST surface:
//! - `profiles` table: `id`, `ritual_streak`, `last_completed_date`
//!   (`YYYY-MM-DD`), `preferences` (JSON object)
//! - `journal_entries` table: one row per entry
//!
//! Writes to `profiles` are upserts on `id`, so first-time users get their
//! row created on the first completion. Retries belong to the transport
//! layer and are not attempted here.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::dates::CalendarDay;
use crate::error::StoreError;
use crate::journal::{JournalDigest, JournalEntry, JournalEntryUpdate, JournalStore};
use crate::ritual::{merge_preferences, UserRitualState};
use crate::store::ProfileStore;

/// Connection settings for the Supabase backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`.
    pub url: String,
    /// Anonymous API key; row-level security does the real gating.
    pub anon_key: String,
}

/// PostgREST client implementing [`ProfileStore`] and [`JournalStore`].
#[derive(Debug)]
pub struct SupabaseStore {
    base_url: String,
    anon_key: String,
    http: Client,
}

/// Wire shape of one `profiles` row.
#[derive(Debug, Serialize, Deserialize)]
struct ProfileRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    ritual_streak: u32,
    last_completed_date: Option<CalendarDay>,
    #[serde(default)]
    preferences: Map<String, Value>,
}

impl ProfileRow {
    fn into_state(self) -> UserRitualState {
        UserRitualState {
            streak: self.ritual_streak,
            last_completed: self.last_completed_date,
            preferences: self.preferences,
        }
    }

    fn from_state(user_id: &str, state: &UserRitualState) -> Self {
        Self {
            id: Some(user_id.to_string()),
            ritual_streak: state.streak,
            last_completed_date: state.last_completed,
            preferences: state.preferences.clone(),
        }
    }
}

impl SupabaseStore {
    /// Create a store from connection settings.
    ///
    /// # Errors
    /// [`StoreError::NotConfigured`] when the URL or key is empty.
    pub fn new(config: &SupabaseConfig) -> Result<Self, StoreError> {
        if config.url.trim().is_empty() {
            return Err(StoreError::NotConfigured("missing Supabase URL".to_string()));
        }
        if config.anon_key.trim().is_empty() {
            return Err(StoreError::NotConfigured(
                "missing Supabase anon key".to_string(),
            ));
        }
        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            http: Client::new(),
        })
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        let url = format!("{}/rest/v1/{table}", self.base_url);
        self.http
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }
}

async fn ensure_success(resp: Response) -> Result<Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        let message = resp.text().await.unwrap_or_default();
        Err(StoreError::Backend {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ProfileStore for SupabaseStore {
    async fn load_state(&self, user_id: &str) -> Result<Option<UserRitualState>, StoreError> {
        let resp = self
            .request(Method::GET, "profiles")
            .query(&[
                ("id", format!("eq.{user_id}")),
                (
                    "select",
                    "ritual_streak,last_completed_date,preferences".to_string(),
                ),
            ])
            .send()
            .await?;
        let rows: Vec<ProfileRow> = ensure_success(resp).await?.json().await?;
        Ok(rows.into_iter().next().map(ProfileRow::into_state))
    }

    async fn save_state(&self, user_id: &str, state: &UserRitualState) -> Result<(), StoreError> {
        let row = ProfileRow::from_state(user_id, state);
        let resp = self
            .request(Method::POST, "profiles")
            .query(&[("on_conflict", "id")])
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&[row])
            .send()
            .await?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn update_preferences(
        &self,
        user_id: &str,
        partial: Map<String, Value>,
    ) -> Result<Map<String, Value>, StoreError> {
        // Read-modify-write of the whole row; the backend offers no partial
        // JSON merge through PostgREST.
        let state = self.load_state(user_id).await?.unwrap_or_default();
        let merged = merge_preferences(&state.preferences, partial);
        let updated = UserRitualState {
            preferences: merged.clone(),
            ..state
        };
        self.save_state(user_id, &updated).await?;
        Ok(merged)
    }
}

#[async_trait]
impl JournalStore for SupabaseStore {
    async fn recent_entries(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<JournalEntry>, StoreError> {
        let resp = self
            .request(Method::GET, "journal_entries")
            .query(&[
                ("user_id", format!("eq.{user_id}")),
                ("order", "entry_date.desc".to_string()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await?;
        let entries: Vec<JournalEntry> = ensure_success(resp).await?.json().await?;
        Ok(entries)
    }

    async fn create_entry(&self, entry: JournalEntry) -> Result<JournalEntry, StoreError> {
        let resp = self
            .request(Method::POST, "journal_entries")
            .header("Prefer", "return=representation")
            .json(&[&entry])
            .send()
            .await?;
        let mut created: Vec<JournalEntry> = ensure_success(resp).await?.json().await?;
        created
            .pop()
            .ok_or_else(|| StoreError::InvalidRecord("insert returned no rows".to_string()))
    }

    async fn update_entry(
        &self,
        entry_id: Uuid,
        changes: JournalEntryUpdate,
    ) -> Result<(), StoreError> {
        let resp = self
            .request(Method::PATCH, "journal_entries")
            .query(&[("id", format!("eq.{entry_id}"))])
            .json(&changes)
            .send()
            .await?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn delete_entry(&self, entry_id: Uuid) -> Result<(), StoreError> {
        let resp = self
            .request(Method::DELETE, "journal_entries")
            .query(&[("id", format!("eq.{entry_id}"))])
            .send()
            .await?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn weekly_digest(&self, user_id: &str) -> Result<Vec<JournalDigest>, StoreError> {
        let resp = self
            .request(Method::GET, "journal_entries")
            .query(&[
                ("user_id", format!("eq.{user_id}")),
                ("select", "entry_date,ai_summary,mood_tag".to_string()),
                ("order", "entry_date.desc".to_string()),
                ("limit", "7".to_string()),
            ])
            .send()
            .await?;
        let digest: Vec<JournalDigest> = ensure_success(resp).await?.json().await?;
        Ok(digest)
    }
}
