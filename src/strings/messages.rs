//! # Messages
//!
//! Constant strings and format functions for user-facing replies.

/// Reaction attached to messages the bot could not act on.
pub const CONFUSED_REACTION: &str = "❓";

pub fn unknown_command(prefix: &str, command: &str) -> String {
    format!(
        "Unknown command `{prefix}{command}` Send `{prefix}help` to get the list of all available commands"
    )
}
