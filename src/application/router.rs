//! # Command Router
//!
//! Routes incoming messages to the handler registered for their command.
//! It filters on the configured prefix, parses the command and its arguments,
//! and either launches the handler or reports the failure back to the conversation.
//!
//! Dispatch is launch-and-detach: `route` returns as soon as the handler task is
//! spawned. Handler timeouts and crash isolation are the handler's own business.

use std::sync::Arc;

use crate::application::failure::FailureHandler;
use crate::application::parsing::{Invocation, parse_invocation};
use crate::application::registry::CommandRegistry;
use crate::domain::traits::InboundMessage;
use crate::domain::types::{DispatchOutcome, Lookup};
use crate::strings;

pub struct CommandRouter {
    prefix: String,
    registry: Arc<CommandRegistry>,
    failures: FailureHandler,
}

impl CommandRouter {
    pub fn new(prefix: impl Into<String>, registry: Arc<CommandRegistry>) -> Self {
        Self {
            prefix: prefix.into(),
            registry,
            failures: FailureHandler::new(),
        }
    }

    /// Handles one inbound message. Never fails: every problem is logged and,
    /// for unknown commands, reported in the conversation.
    pub async fn route(&self, message: Arc<dyn InboundMessage>) -> DispatchOutcome {
        let (name, args) = match parse_invocation(&self.prefix, message.content()) {
            Invocation::NotAddressed => {
                tracing::trace!("Ignoring message without prefix {:?}", self.prefix);
                return DispatchOutcome::NotAddressed;
            }
            Invocation::Malformed(kind) => {
                tracing::warn!(
                    "{}",
                    strings::logs::malformed_invocation(kind, message.content())
                );
                return DispatchOutcome::Malformed(kind);
            }
            Invocation::Command { name, args } => (name, args),
        };

        match self.registry.lookup(&name) {
            Lookup::Absent => {
                tracing::warn!(
                    "{}",
                    strings::logs::unknown_command(&self.prefix, name.as_str())
                );
                let reply = strings::messages::unknown_command(&self.prefix, name.as_str());
                self.failures.report(message.as_ref(), Some(&reply)).await;
                DispatchOutcome::UnknownCommand(name)
            }
            Lookup::Found(handler) => {
                tracing::info!("Router dispatching cmd='{}' args={:?}", name, args);
                let task_args = args.clone();
                tokio::spawn(async move {
                    handler.handle(message, task_args).await;
                });
                DispatchOutcome::Dispatched {
                    command: name,
                    args,
                }
            }
        }
    }
}
