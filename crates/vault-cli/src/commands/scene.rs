use clap::Subcommand;
use vault_core::{Catalogs, ContentPicker, ProfileStore};

use super::{open_store, runtime};

#[derive(Subcommand)]
pub enum SceneAction {
    /// Show the preferred scene, or a random one if none is set
    Show,
    /// List all visualization scenes
    List,
}

pub fn run(action: SceneAction) -> Result<(), Box<dyn std::error::Error>> {
    let catalogs = Catalogs::builtin()?;

    match action {
        SceneAction::Show => {
            // Preferences come from the store when configured; without a
            // backend the pick is simply random.
            let preferences = match open_store() {
                Ok((store, user_id)) => runtime()?
                    .block_on(store.load_state(&user_id))?
                    .unwrap_or_default()
                    .preferences,
                Err(_) => serde_json::Map::new(),
            };
            let mut picker = ContentPicker::new();
            let scene = picker.preferred_or_random_scene(&preferences, &catalogs);
            println!("{} - {}", scene.title, scene.description);
            println!("{}", scene.prompt);
            println!("image: {}", scene.image_url);
        }
        SceneAction::List => {
            for scene in catalogs.scenes() {
                println!("{}. {} - {}", scene.id, scene.title, scene.description);
            }
        }
    }
    Ok(())
}
