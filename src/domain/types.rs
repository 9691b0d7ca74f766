//! # Domain Types
//!
//! Value types shared by the registry, the router and the failure handler.

use std::fmt;
use std::sync::Arc;

use crate::domain::traits::CommandHandler;

/// A command name in canonical (lowercase) form.
///
/// Registry keys and lookup keys both go through [`CommandName::parse`], so they
/// always compare in the same case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandName(String);

impl CommandName {
    /// Normalizes a raw token into a command name.
    /// Returns `None` for an empty token or one containing whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || raw.chars().any(char::is_whitespace) {
            return None;
        }
        Some(Self(raw.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of a registry lookup.
pub enum Lookup {
    Found(Arc<dyn CommandHandler>),
    Absent,
}

/// Why an addressed message could not be turned into a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedInvocation {
    /// Nothing but whitespace after the prefix.
    NoArguments,
    /// The first token did not yield a command name.
    UnparsableCommand,
}

/// What the router did with one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    NotAddressed,
    Malformed(MalformedInvocation),
    UnknownCommand(CommandName),
    Dispatched {
        command: CommandName,
        args: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_name_is_lowercased() {
        let name = CommandName::parse("HeLp").unwrap();
        assert_eq!(name.as_str(), "help");
        assert_eq!(name, CommandName::parse("help").unwrap());
        assert_eq!(name.to_string(), "help");
    }

    #[test]
    fn test_command_name_rejects_empty_and_whitespace() {
        assert!(CommandName::parse("").is_none());
        assert!(CommandName::parse("two words").is_none());
        assert!(CommandName::parse("tab\there").is_none());
    }

    #[test]
    fn test_command_name_keeps_symbols() {
        let name = CommandName::parse("Top-10!").unwrap();
        assert_eq!(name.as_str(), "top-10!");
    }
}
