//! # Domain Traits
//!
//! Abstract interfaces for the gateway message and the command handlers.
//! The Matrix adapter in the Infrastructure layer implements `InboundMessage`;
//! everything under `interface/commands` implements `CommandHandler`.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// One message delivered by the gateway, scoped to the conversation it came from.
#[async_trait]
pub trait InboundMessage: Send + Sync {
    /// Raw text content of the message
    fn content(&self) -> &str;

    /// Send a reply into the originating conversation
    async fn reply(&self, content: &str) -> Result<()>;

    /// Attach a reaction glyph to this message
    async fn react(&self, glyph: &str) -> Result<()>;
}

/// Behavior bound to a command name in the registry.
///
/// Handlers run detached from the router: they own their error reporting and
/// any long-running work they start.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, message: Arc<dyn InboundMessage>, args: Vec<String>);
}
