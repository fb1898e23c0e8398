pub mod affirmation;
pub mod coach;
pub mod config;
pub mod journal;
pub mod prefs;
pub mod ritual;
pub mod scene;

use vault_core::{Config, SupabaseStore};

type CliError = Box<dyn std::error::Error>;

/// Single-threaded runtime for the store round trips.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// Open the configured backend store plus the active user id.
pub(crate) fn open_store() -> Result<(SupabaseStore, String), CliError> {
    let config = Config::load_or_default();
    let supabase = config
        .supabase
        .ok_or("Supabase backend not configured; run `vault-cli config init`")?;
    let user_id = config
        .user
        .id
        .ok_or("no user id configured; run `vault-cli config init`")?;
    let store = SupabaseStore::new(&supabase)?;
    Ok((store, user_id))
}
