use clap::Subcommand;
use vault_core::{Config, SupabaseConfig};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Write the config file with backend settings and the active user
    Init {
        /// Supabase project URL
        #[arg(long)]
        url: String,
        /// Supabase anonymous API key
        #[arg(long)]
        anon_key: String,
        /// Opaque user id the profile store is keyed by
        #[arg(long)]
        user_id: String,
    },
    /// Show the current configuration
    Show,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Init {
            url,
            anon_key,
            user_id,
        } => {
            let mut config = Config::load_or_default();
            config.supabase = Some(SupabaseConfig { url, anon_key });
            config.user.id = Some(user_id);
            config.save()?;
            println!("Configuration saved");
        }
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!(
                "user id: {}",
                config.user.id.as_deref().unwrap_or("(not set)")
            );
            match config.supabase {
                Some(supabase) => {
                    println!("supabase url: {}", supabase.url);
                    println!("anon key: {}", mask(&supabase.anon_key));
                }
                None => println!("supabase: not configured"),
            }
        }
    }
    Ok(())
}

fn mask(key: &str) -> String {
    if key.len() <= 8 {
        "****".to_string()
    } else {
        format!("{}****", &key[..8])
    }
}
