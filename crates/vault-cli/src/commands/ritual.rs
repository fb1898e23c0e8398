use clap::Subcommand;
use vault_core::{RitualEngine, StreakTransition};

use super::{open_store, runtime};

#[derive(Subcommand)]
pub enum RitualAction {
    /// Record today's completed ritual
    Complete,
    /// Show the current streak
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: RitualAction) -> Result<(), Box<dyn std::error::Error>> {
    let (store, user_id) = open_store()?;
    let engine = RitualEngine::new(store);
    let now = chrono::Local::now();

    match action {
        RitualAction::Complete => {
            let update = runtime()?.block_on(engine.complete_ritual(&user_id, &now))?;
            match update.transition {
                StreakTransition::AlreadyCompleted => {
                    println!(
                        "Already completed today. Streak: {} days",
                        update.state.streak
                    );
                }
                StreakTransition::Continued => {
                    println!("Streak continued: {} days", update.state.streak);
                }
                StreakTransition::Started => {
                    println!("New streak started: {} day", update.state.streak);
                }
            }
        }
        RitualAction::Status { json } => {
            let display = runtime()?.block_on(engine.streak_display(&user_id, &now))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&display)?);
            } else {
                println!(
                    "Streak: {} days ({})",
                    display.streak,
                    if display.completed_today {
                        "completed today"
                    } else {
                        "not yet completed today"
                    }
                );
            }
        }
    }
    Ok(())
}
