//! PostgREST client tests against a mock Supabase server.

use mockito::Matcher;
use serde_json::json;

use vault_core::ritual::preferences_from_pairs;
use vault_core::{JournalStore, ProfileStore, StoreError, SupabaseConfig, SupabaseStore};

fn store_for(server: &mockito::ServerGuard) -> SupabaseStore {
    SupabaseStore::new(&SupabaseConfig {
        url: server.url(),
        anon_key: "test-key".to_string(),
    })
    .unwrap()
}

#[tokio::test]
async fn load_state_returns_none_for_missing_row() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/v1/profiles")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("id".to_string(), "eq.user-1".to_string()),
            Matcher::UrlEncoded(
                "select".to_string(),
                "ritual_streak,last_completed_date,preferences".to_string(),
            ),
        ]))
        .match_header("apikey", "test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let store = store_for(&server);
    let state = store.load_state("user-1").await.unwrap();
    assert!(state.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn load_state_parses_existing_row() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/rest/v1/profiles")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{
                "ritual_streak": 6,
                "last_completed_date": "2024-03-11",
                "preferences": {"preferredSceneId": "3"}
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let store = store_for(&server);
    let state = store.load_state("user-1").await.unwrap().unwrap();
    assert_eq!(state.streak, 6);
    assert_eq!(
        state.last_completed.unwrap().to_string(),
        "2024-03-11".to_string()
    );
    assert_eq!(state.preferences.get("preferredSceneId").unwrap(), "3");
}

#[tokio::test]
async fn backend_failure_surfaces_status_and_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/rest/v1/profiles")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("service unavailable")
        .create_async()
        .await;

    let store = store_for(&server);
    let err = store.load_state("user-1").await.unwrap_err();
    match err {
        StoreError::Backend { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "service unavailable");
        }
        other => panic!("expected Backend error, got {other:?}"),
    }
}

#[tokio::test]
async fn save_state_upserts_on_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/v1/profiles")
        .match_query(Matcher::UrlEncoded(
            "on_conflict".to_string(),
            "id".to_string(),
        ))
        .match_header("Prefer", "resolution=merge-duplicates,return=minimal")
        .match_body(Matcher::Json(json!([{
            "id": "user-1",
            "ritual_streak": 1,
            "last_completed_date": "2024-03-11",
            "preferences": {}
        }])))
        .with_status(201)
        .create_async()
        .await;

    let store = store_for(&server);
    let state = vault_core::UserRitualState {
        streak: 1,
        last_completed: Some(
            chrono::NaiveDate::parse_from_str("2024-03-11", "%Y-%m-%d").unwrap(),
        ),
        preferences: serde_json::Map::new(),
    };
    store.save_state("user-1", &state).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn update_preferences_merges_with_stored_map() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/rest/v1/profiles")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{
                "ritual_streak": 4,
                "last_completed_date": "2024-03-10",
                "preferences": {"preferredVoice": "calm"}
            }])
            .to_string(),
        )
        .create_async()
        .await;
    let upsert = server
        .mock("POST", "/rest/v1/profiles")
        .match_query(Matcher::Any)
        .match_body(Matcher::Json(json!([{
            "id": "user-1",
            "ritual_streak": 4,
            "last_completed_date": "2024-03-10",
            "preferences": {"preferredVoice": "calm", "preferredSceneId": "3"}
        }])))
        .with_status(201)
        .create_async()
        .await;

    let store = store_for(&server);
    let merged = store
        .update_preferences(
            "user-1",
            preferences_from_pairs([("preferredSceneId", "3")]),
        )
        .await
        .unwrap();
    assert_eq!(merged.get("preferredVoice").unwrap(), "calm");
    assert_eq!(merged.get("preferredSceneId").unwrap(), "3");
    upsert.assert_async().await;
}

#[tokio::test]
async fn recent_entries_parses_rows() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/rest/v1/journal_entries")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("user_id".to_string(), "eq.user-1".to_string()),
            Matcher::UrlEncoded("order".to_string(), "entry_date.desc".to_string()),
            Matcher::UrlEncoded("limit".to_string(), "10".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{
                "id": "7f8a1f7e-64f5-4f4a-9a6f-0a1b2c3d4e5f",
                "user_id": "user-1",
                "entry_date": "2024-03-10",
                "prompt": "List three financial blessings in your life today, no matter how small.",
                "content": "Grateful for steady income.",
                "mood_tag": "hopeful",
                "ai_summary": null,
                "created_at": "2024-03-10T21:14:00Z"
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let store = store_for(&server);
    let entries = store.recent_entries("user-1", 10).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user_id, "user-1");
    assert_eq!(entries[0].mood_tag.as_deref(), Some("hopeful"));
    assert_eq!(entries[0].ai_summary, None);
}

#[tokio::test]
async fn weekly_digest_selects_digest_columns() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/v1/journal_entries")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("user_id".to_string(), "eq.user-1".to_string()),
            Matcher::UrlEncoded(
                "select".to_string(),
                "entry_date,ai_summary,mood_tag".to_string(),
            ),
            Matcher::UrlEncoded("limit".to_string(), "7".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                {"entry_date": "2024-03-10", "ai_summary": "Focused on goals.", "mood_tag": "hopeful"},
                {"entry_date": "2024-03-09", "ai_summary": null, "mood_tag": null}
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let store = store_for(&server);
    let digest = store.weekly_digest("user-1").await.unwrap();
    assert_eq!(digest.len(), 2);
    assert_eq!(digest[0].ai_summary.as_deref(), Some("Focused on goals."));
    assert_eq!(digest[1].mood_tag, None);
    mock.assert_async().await;
}
