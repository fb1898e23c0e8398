use clap::Subcommand;
use uuid::Uuid;
use vault_core::dates::{relative_description, to_calendar_day};
use vault_core::journal::JournalStore;
use vault_core::{Catalogs, ContentPicker, JournalEntry, ProfileStore};

use super::{open_store, runtime};

#[derive(Subcommand)]
pub enum JournalAction {
    /// Show a journal prompt for the current (or a given) streak
    Prompt {
        /// Streak to pick the tier for; defaults to the stored streak
        #[arg(long)]
        streak: Option<u32>,
    },
    /// List recent entries
    List {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Add an entry for today
    Add {
        /// Entry text
        content: String,
        /// The prompt the entry answers; defaults to a tier-matched one
        #[arg(long)]
        prompt: Option<String>,
        /// Mood tag, e.g. "hopeful"
        #[arg(long)]
        mood: Option<String>,
    },
    /// Delete an entry by id
    Delete { id: String },
    /// Digest of the last week's entries
    Digest,
}

pub fn run(action: JournalAction) -> Result<(), Box<dyn std::error::Error>> {
    let catalogs = Catalogs::builtin()?;
    let now = chrono::Local::now();
    let today = to_calendar_day(&now);

    match action {
        JournalAction::Prompt { streak } => {
            let streak = match streak {
                Some(s) => s,
                None => {
                    let (store, user_id) = open_store()?;
                    runtime()?
                        .block_on(store.load_state(&user_id))?
                        .unwrap_or_default()
                        .streak
                }
            };
            let mut picker = ContentPicker::new();
            println!("{}", picker.prompt_for_streak(streak, &catalogs)?);
        }
        JournalAction::List { limit } => {
            let (store, user_id) = open_store()?;
            let entries = runtime()?.block_on(store.recent_entries(&user_id, limit))?;
            if entries.is_empty() {
                println!("No journal entries yet.");
            }
            for entry in entries {
                let mood = entry.mood_tag.as_deref().unwrap_or("-");
                println!(
                    "{}  {}  [{}]  {}",
                    entry.id,
                    relative_description(entry.entry_date, today),
                    mood,
                    entry.content
                );
            }
        }
        JournalAction::Add {
            content,
            prompt,
            mood,
        } => {
            let (store, user_id) = open_store()?;
            let rt = runtime()?;
            let prompt = match prompt {
                Some(p) => p,
                None => {
                    let streak = rt
                        .block_on(store.load_state(&user_id))?
                        .unwrap_or_default()
                        .streak;
                    ContentPicker::new().prompt_for_streak(streak, &catalogs)?
                }
            };
            let mut entry = JournalEntry::new(user_id, today, prompt, content);
            entry.mood_tag = mood;
            let created = rt.block_on(store.create_entry(entry))?;
            println!("Entry saved ({})", created.id);
        }
        JournalAction::Delete { id } => {
            let entry_id: Uuid = id.parse()?;
            let (store, _user_id) = open_store()?;
            runtime()?.block_on(store.delete_entry(entry_id))?;
            println!("Entry deleted");
        }
        JournalAction::Digest => {
            let (store, user_id) = open_store()?;
            let digest = runtime()?.block_on(store.weekly_digest(&user_id))?;
            if digest.is_empty() {
                println!("No entries this week.");
            }
            for line in digest {
                println!(
                    "{}  [{}]  {}",
                    relative_description(line.entry_date, today),
                    line.mood_tag.as_deref().unwrap_or("-"),
                    line.ai_summary.as_deref().unwrap_or("(no summary)")
                );
            }
        }
    }
    Ok(())
}
