use clap::Subcommand;
use vault_core::coach;

#[derive(Subcommand)]
pub enum CoachAction {
    /// Ask the coach a question
    Ask { message: String },
    /// Summarize a journal text (placeholder)
    Summarize { text: String },
}

pub fn run(action: CoachAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CoachAction::Ask { message } => {
            let reply = coach::reply_to(&message);
            println!("{}", reply.text);
        }
        CoachAction::Summarize { text } => {
            println!("{}", coach::summarize_entry(&text));
        }
    }
    Ok(())
}
