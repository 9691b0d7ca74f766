//! # Command Registry
//!
//! Maps canonical command names to their handlers.
//!
//! Populated once at startup, then shared read-only (`Arc<CommandRegistry>`) with
//! the router while the gateway delivers events. Registration needs `&mut self`,
//! so there is no way to register concurrently with lookups.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::traits::CommandHandler;
use crate::domain::types::{CommandName, Lookup};

#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<CommandName, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `handler` to `name`, silently replacing any previous binding.
    pub fn register(&mut self, name: CommandName, handler: Arc<dyn CommandHandler>) {
        tracing::debug!(command = %name, "Registering command handler");
        if self.handlers.insert(name.clone(), handler).is_some() {
            tracing::debug!(command = %name, "Replaced existing handler");
        }
    }

    pub fn lookup(&self, name: &CommandName) -> Lookup {
        match self.handlers.get(name) {
            Some(handler) => Lookup::Found(handler.clone()),
            None => Lookup::Absent,
        }
    }

    pub fn has(&self, name: &CommandName) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(CommandName::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
