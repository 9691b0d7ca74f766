//! # Failure Handler
//!
//! Surfaces a dispatch failure in the originating conversation: a reaction on the
//! message, then an optional reply. Both are attempted independently and delivery
//! errors are logged, never propagated.

use crate::domain::traits::InboundMessage;
use crate::strings;

#[derive(Debug, Clone)]
pub struct FailureHandler {
    reaction: &'static str,
}

impl Default for FailureHandler {
    fn default() -> Self {
        Self {
            reaction: strings::messages::CONFUSED_REACTION,
        }
    }
}

impl FailureHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn report(&self, message: &dyn InboundMessage, reply: Option<&str>) {
        if let Err(e) = message.react(self.reaction).await {
            tracing::error!("{}", strings::logs::reaction_failed(&format!("{e:#}")));
        }

        if let Some(text) = reply
            && let Err(e) = message.reply(text).await
        {
            tracing::error!("{}", strings::logs::reply_failed(&format!("{e:#}")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockMessage;

    #[tokio::test]
    async fn test_reacts_then_replies() {
        let message = MockMessage::new("cs!nope");
        FailureHandler::new()
            .report(&message, Some("Unknown command"))
            .await;

        assert_eq!(message.reactions(), vec!["❓".to_string()]);
        assert_eq!(message.replies(), vec!["Unknown command".to_string()]);
    }

    #[tokio::test]
    async fn test_reaction_only_without_reply_text() {
        let message = MockMessage::new("cs!nope");
        FailureHandler::new().report(&message, None).await;

        assert_eq!(message.reactions().len(), 1);
        assert!(message.replies().is_empty());
    }

    #[tokio::test]
    async fn test_reply_attempted_when_reaction_fails() {
        let message = MockMessage {
            fail_react: true,
            ..MockMessage::new("cs!nope")
        };
        FailureHandler::new().report(&message, Some("still sent")).await;

        assert!(message.reactions().is_empty());
        assert_eq!(message.replies(), vec!["still sent".to_string()]);
    }

    #[tokio::test]
    async fn test_reply_failure_is_absorbed() {
        let message = MockMessage {
            fail_reply: true,
            ..MockMessage::new("cs!nope")
        };
        FailureHandler::new().report(&message, Some("dropped")).await;

        assert_eq!(message.reactions().len(), 1);
        assert!(message.replies().is_empty());
    }
}
