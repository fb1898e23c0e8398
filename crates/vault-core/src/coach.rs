//! Placeholder AI coach.
//!
//! Keyword-routed canned replies stand in for a real model. Keeping the
//! seam here means the chat surface and journal summaries already flow
//! through one function each when a backend model arrives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One coach reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachReply {
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Canned reply for a chat message, keyed on simple keyword matches.
pub fn reply_to(message: &str) -> CoachReply {
    let lower = message.to_lowercase();
    let text = if lower.contains("hello") || lower.contains("hi") {
        "Hello! I'm your wealth identity coach. How can I assist you today?"
    } else if lower.contains("goal") {
        "Setting clear, specific financial goals is the first step to building wealth. \
         What specific goal would you like to work on?"
    } else if lower.contains("invest") {
        "Investing is a powerful way to build wealth. Start small, learn consistently, \
         and increase your investments as your knowledge grows."
    } else if lower.contains("money") || lower.contains("finance") {
        "Your relationship with money is a reflection of your self-worth. \
         Let's work on building a positive money mindset."
    } else {
        "\u{1F4A1} Coming soon: Advanced AI coaching to help you develop your wealth \
         identity and achieve financial freedom."
    };
    CoachReply {
        text: text.to_string(),
        timestamp: Utc::now(),
    }
}

/// Placeholder summary for a journal entry.
pub fn summarize_entry(_journal_text: &str) -> String {
    "This journal entry reflects on personal growth and financial goals. Key insights \
     include a focus on mindset and practical steps toward financial independence."
        .to_string()
}
