//! # Command Handlers
//!
//! Contains the handler for each supported command (e.g., help).
//! These handlers are registered at startup and invoked by the Router.

pub mod help;

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::application::registry::CommandRegistry;
use crate::domain::types::CommandName;

/// Populates a registry with every built-in command.
pub fn register_all(registry: &mut CommandRegistry, prefix: &str) -> Result<()> {
    let name = CommandName::parse(help::NAME).context("invalid command name")?;
    registry.register(name, Arc::new(help::HelpCommand::new(prefix)));
    Ok(())
}

/// Warns about registry states the router's replies would contradict.
/// Returns whether the help command is bound.
pub fn check_registry(registry: &CommandRegistry, prefix: &str) -> bool {
    if registry.is_empty() {
        tracing::warn!("{}", crate::strings::logs::NO_COMMANDS);
    }

    let help_bound =
        CommandName::parse(help::NAME).is_some_and(|name| registry.has(&name));
    if !help_bound {
        tracing::warn!("{}", crate::strings::logs::help_missing(prefix, help::NAME));
    }
    help_bound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry, "cs!").unwrap();
        assert_eq!(registry.names(), vec!["help"]);
        assert!(check_registry(&registry, "cs!"));
    }

    #[test]
    fn test_check_flags_missing_help() {
        assert!(!check_registry(&CommandRegistry::new(), "cs!"));
    }
}
