//! # Parsing Utils
//!
//! Turns raw message text into a command invocation: the case-insensitive prefix
//! filter, whitespace tokenization and command name extraction.

use crate::domain::types::{CommandName, MalformedInvocation};

/// Parsed form of one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// The text does not start with the prefix.
    NotAddressed,
    Malformed(MalformedInvocation),
    Command {
        name: CommandName,
        args: Vec<String>,
    },
}

/// Strips `prefix` from the start of `content`, comparing case-insensitively.
/// Returns the remainder, or `None` if the message does not start with the prefix.
pub fn strip_prefix<'a>(prefix: &str, content: &'a str) -> Option<&'a str> {
    let width = prefix.chars().count();
    let split = content
        .char_indices()
        .nth(width)
        .map_or(content.len(), |(idx, _)| idx);
    let (head, rest) = content.split_at(split);

    if head.chars().count() < width {
        return None;
    }
    (head.to_lowercase() == prefix.to_lowercase()).then_some(rest)
}

pub fn parse_invocation(prefix: &str, content: &str) -> Invocation {
    let Some(rest) = strip_prefix(prefix, content) else {
        return Invocation::NotAddressed;
    };

    // split_whitespace trims both ends and never yields empty tokens
    let mut tokens = rest.split_whitespace();
    let Some(first) = tokens.next() else {
        return Invocation::Malformed(MalformedInvocation::NoArguments);
    };

    match CommandName::parse(first) {
        Some(name) => Invocation::Command {
            name,
            args: tokens.map(str::to_owned).collect(),
        },
        None => Invocation::Malformed(MalformedInvocation::UnparsableCommand),
    }
}
