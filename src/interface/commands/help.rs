//! # Help Command
//!
//! Handles the `help` command.
//! Displays the main help menu to the user.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::traits::{CommandHandler, InboundMessage};

pub const NAME: &str = "help";

pub struct HelpCommand {
    prefix: String,
}

impl HelpCommand {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

#[async_trait]
impl CommandHandler for HelpCommand {
    async fn handle(&self, message: Arc<dyn InboundMessage>, _args: Vec<String>) {
        let text = crate::strings::help::main(&self.prefix);
        if let Err(e) = message.reply(&text).await {
            tracing::error!("help: failed to send help text: {e:#}");
        }
    }
}
