use clap::Subcommand;
use vault_core::{
    affirmation_of_the_day, affirmations_by_category, AffirmationCategory, Catalogs,
    ContentPicker,
};

#[derive(Subcommand)]
pub enum AffirmationAction {
    /// Today's affirmation (deterministic for the calendar day)
    Today,
    /// A random affirmation
    Random,
    /// List affirmations, optionally filtered by category
    List {
        /// Category name, e.g. "abundance" or "self-worth"
        #[arg(long)]
        category: Option<String>,
    },
}

pub fn run(action: AffirmationAction) -> Result<(), Box<dyn std::error::Error>> {
    let catalogs = Catalogs::builtin()?;

    match action {
        AffirmationAction::Today => {
            let now = chrono::Local::now();
            let entry = affirmation_of_the_day(&now, catalogs.affirmations());
            println!("{}", entry.text);
        }
        AffirmationAction::Random => {
            let mut picker = ContentPicker::new();
            let entry = picker.random_affirmation(catalogs.affirmations());
            println!("{}", entry.text);
        }
        AffirmationAction::List { category } => {
            match category {
                Some(name) => {
                    let category = parse_category(&name)?;
                    for entry in affirmations_by_category(catalogs.affirmations(), category) {
                        println!("{}. {}", entry.id, entry.text);
                    }
                }
                None => {
                    for entry in catalogs.affirmations() {
                        println!("{}. [{}] {}", entry.id, entry.category, entry.text);
                    }
                }
            }
        }
    }
    Ok(())
}

fn parse_category(name: &str) -> Result<AffirmationCategory, Box<dyn std::error::Error>> {
    serde_json::from_value(serde_json::Value::String(name.to_string()))
        .map_err(|_| format!("unknown category '{name}'").into())
}
