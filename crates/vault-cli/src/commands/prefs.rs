use clap::Subcommand;
use vault_core::ritual::preferences_from_pairs;
use vault_core::{Catalogs, ProfileStore, PREFERRED_SCENE_KEY, PREFERRED_VOICE_KEY};

use super::{open_store, runtime};

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Show stored preferences
    Show,
    /// Set the preferred visualization scene
    SetScene {
        /// Scene id from `vault-cli scene list`
        scene_id: String,
    },
    /// Set the coaching voice tag
    SetVoice { voice: String },
}

pub fn run(action: PrefsAction) -> Result<(), Box<dyn std::error::Error>> {
    let (store, user_id) = open_store()?;
    let rt = runtime()?;

    match action {
        PrefsAction::Show => {
            let preferences = rt
                .block_on(store.load_state(&user_id))?
                .unwrap_or_default()
                .preferences;
            if preferences.is_empty() {
                println!("No preferences set.");
            } else {
                println!("{}", serde_json::to_string_pretty(&preferences)?);
            }
        }
        PrefsAction::SetScene { scene_id } => {
            let catalogs = Catalogs::builtin()?;
            if catalogs.scene_by_id(&scene_id).is_none() {
                return Err(format!("unknown scene id '{scene_id}'").into());
            }
            rt.block_on(store.update_preferences(
                &user_id,
                preferences_from_pairs([(PREFERRED_SCENE_KEY, scene_id.as_str())]),
            ))?;
            println!("Preferred scene set to {scene_id}");
        }
        PrefsAction::SetVoice { voice } => {
            rt.block_on(store.update_preferences(
                &user_id,
                preferences_from_pairs([(PREFERRED_VOICE_KEY, voice.as_str())]),
            ))?;
            println!("Coaching voice set to {voice}");
        }
    }
    Ok(())
}
