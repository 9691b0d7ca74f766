//! Test doubles for the gateway message and command handlers.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

use crate::domain::traits::{CommandHandler, InboundMessage};

/// Records every reply and reaction; either capability can be made to fail.
#[derive(Default)]
pub struct MockMessage {
    pub content: String,
    pub replies: Mutex<Vec<String>>,
    pub reactions: Mutex<Vec<String>>,
    pub fail_reply: bool,
    pub fail_react: bool,
}

impl MockMessage {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            ..Default::default()
        }
    }

    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }

    pub fn reactions(&self) -> Vec<String> {
        self.reactions.lock().unwrap().clone()
    }
}

#[async_trait]
impl InboundMessage for MockMessage {
    fn content(&self) -> &str {
        &self.content
    }

    async fn reply(&self, content: &str) -> Result<()> {
        if self.fail_reply {
            return Err(anyhow!("reply rejected"));
        }
        self.replies.lock().unwrap().push(content.to_string());
        Ok(())
    }

    async fn react(&self, glyph: &str) -> Result<()> {
        if self.fail_react {
            return Err(anyhow!("reaction rejected"));
        }
        self.reactions.lock().unwrap().push(glyph.to_string());
        Ok(())
    }
}

/// Forwards the arguments of every invocation over a channel, tagged with `label`.
pub struct RecordingHandler {
    label: &'static str,
    tx: mpsc::UnboundedSender<(&'static str, Vec<String>)>,
}

impl RecordingHandler {
    pub fn new(
        label: &'static str,
    ) -> (
        Arc<Self>,
        mpsc::UnboundedReceiver<(&'static str, Vec<String>)>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { label, tx }), rx)
    }

    pub fn with_sender(
        label: &'static str,
        tx: mpsc::UnboundedSender<(&'static str, Vec<String>)>,
    ) -> Arc<Self> {
        Arc::new(Self { label, tx })
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<(&'static str, Vec<String>)> {
        self.tx.clone()
    }
}

#[async_trait]
impl CommandHandler for RecordingHandler {
    async fn handle(&self, _message: Arc<dyn InboundMessage>, args: Vec<String>) {
        let _ = self.tx.send((self.label, args));
    }
}
