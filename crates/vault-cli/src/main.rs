use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "vault-cli", version, about = "Vault CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily ritual streak
    Ritual {
        #[command(subcommand)]
        action: commands::ritual::RitualAction,
    },
    /// Affirmations
    Affirmation {
        #[command(subcommand)]
        action: commands::affirmation::AffirmationAction,
    },
    /// Journal prompts and entries
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Visualization scenes
    Scene {
        #[command(subcommand)]
        action: commands::scene::SceneAction,
    },
    /// Stored preferences
    Prefs {
        #[command(subcommand)]
        action: commands::prefs::PrefsAction,
    },
    /// Chat with the coach (placeholder)
    Coach {
        #[command(subcommand)]
        action: commands::coach::CoachAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Ritual { action } => commands::ritual::run(action),
        Commands::Affirmation { action } => commands::affirmation::run(action),
        Commands::Journal { action } => commands::journal::run(action),
        Commands::Scene { action } => commands::scene::run(action),
        Commands::Prefs { action } => commands::prefs::run(action),
        Commands::Coach { action } => commands::coach::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
