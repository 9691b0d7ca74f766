//! # Matrix Service Adapter
//!
//! Bridges the Matrix SDK and the command router: logs the bot in, turns room
//! message events into `InboundMessage`s and implements replies and reactions.

use crate::domain::config::MatrixConfig;
use crate::domain::traits::InboundMessage;
use crate::strings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use matrix_sdk::Client;
use matrix_sdk::room::Room;
use matrix_sdk::ruma::{MilliSecondsSinceUnixEpoch, OwnedEventId, UserId};
use matrix_sdk::ruma::events::reaction::ReactionEventContent;
use matrix_sdk::ruma::events::relation::{Annotation, InReplyTo};
use matrix_sdk::ruma::events::room::message::{
    MessageType, Relation, RoomMessageEventContent, SyncRoomMessageEvent,
};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Builds the client and logs in with the configured account.
pub async fn login(config: &MatrixConfig) -> Result<Client> {
    let client = Client::builder()
        .homeserver_url(&config.homeserver)
        .build()
        .await
        .context("Failed to build Matrix client")?;

    let password = config.resolve_password()?;
    client
        .matrix_auth()
        .login_username(&config.username, &password)
        .send()
        .await
        .with_context(|| format!("Failed to log in as {}", config.username))?;

    tracing::info!("{}", strings::logs::logged_in(&config.username));

    if let Some(name) = &config.display_name
        && let Err(e) = client.account().set_display_name(Some(name.as_str())).await
    {
        tracing::warn!("{}", strings::logs::set_display_name_fail(&e.to_string()));
    }

    Ok(client)
}

/// Whether an event may reach the router: not sent by the bot itself and not
/// older than `started_at`. Events stamped exactly at `started_at` pass.
pub fn should_route(
    sender: &UserId,
    own: &UserId,
    ts: MilliSecondsSinceUnixEpoch,
    started_at: SystemTime,
) -> bool {
    if sender == own {
        return false;
    }
    let event_time = UNIX_EPOCH + Duration::from_millis(ts.get().into());
    event_time >= started_at
}

/// Body of a plain text message; notices, media and other types yield `None`.
pub fn text_body(msgtype: &MessageType) -> Option<&str> {
    match msgtype {
        MessageType::Text(text) => Some(&text.body),
        _ => None,
    }
}

/// A text message received in a Matrix room.
#[derive(Clone)]
pub struct MatrixMessage {
    room: Room,
    event_id: OwnedEventId,
    body: String,
}

impl MatrixMessage {
    pub fn new(room: Room, event_id: OwnedEventId, body: String) -> Self {
        Self {
            room,
            event_id,
            body,
        }
    }

    /// Extracts a routable message from a sync event.
    ///
    /// Skips redacted and non-text events, the bot's own messages, and anything
    /// sent before `started_at` (backlog from the initial sync).
    pub fn from_event(
        ev: &SyncRoomMessageEvent,
        room: &Room,
        started_at: SystemTime,
    ) -> Option<Self> {
        let original = ev.as_original()?;

        if !should_route(
            &original.sender,
            room.own_user_id(),
            original.origin_server_ts,
            started_at,
        ) {
            return None;
        }

        let body = text_body(&original.content.msgtype)?;
        tracing::debug!("Received message from {}: {}", original.sender, body);
        Some(Self::new(
            room.clone(),
            original.event_id.clone(),
            body.to_owned(),
        ))
    }

    pub fn room_id(&self) -> String {
        self.room.room_id().as_str().to_string()
    }
}

#[async_trait]
impl InboundMessage for MatrixMessage {
    fn content(&self) -> &str {
        &self.body
    }

    async fn reply(&self, content: &str) -> Result<()> {
        tracing::info!("Bot replying in {}: {}", self.room_id(), content);
        let mut reply = RoomMessageEventContent::text_markdown(content);
        reply.relates_to = Some(Relation::Reply {
            in_reply_to: InReplyTo::new(self.event_id.clone()),
        });

        self.room
            .send(reply)
            .await
            .with_context(|| format!("reply to {} in {}", self.event_id, self.room_id()))?;
        Ok(())
    }

    async fn react(&self, glyph: &str) -> Result<()> {
        let reaction =
            ReactionEventContent::new(Annotation::new(self.event_id.clone(), glyph.to_owned()));

        self.room
            .send(reaction)
            .await
            .with_context(|| format!("react to {} in {}", self.event_id, self.room_id()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_sdk::ruma::events::room::message::{
        NoticeMessageEventContent, TextMessageEventContent,
    };
    use matrix_sdk::ruma::{UInt, user_id};

    const STARTED_MS: u64 = 1_700_000_000_000;

    fn started_at() -> SystemTime {
        UNIX_EPOCH + Duration::from_millis(STARTED_MS)
    }

    fn ts(ms: u64) -> MilliSecondsSinceUnixEpoch {
        MilliSecondsSinceUnixEpoch(UInt::new(ms).unwrap())
    }

    #[test]
    fn test_routes_other_users_after_start() {
        let own = user_id!("@csbot:example.org");
        let sender = user_id!("@alice:example.org");
        assert!(should_route(sender, own, ts(STARTED_MS + 5_000), started_at()));
    }

    #[test]
    fn test_skips_own_messages() {
        let own = user_id!("@csbot:example.org");
        assert!(!should_route(own, own, ts(STARTED_MS + 5_000), started_at()));
    }

    #[test]
    fn test_skips_backlog() {
        let own = user_id!("@csbot:example.org");
        let sender = user_id!("@alice:example.org");
        assert!(!should_route(sender, own, ts(STARTED_MS - 1), started_at()));
        assert!(!should_route(sender, own, ts(0), started_at()));
    }

    #[test]
    fn test_event_at_start_instant_is_routed() {
        let own = user_id!("@csbot:example.org");
        let sender = user_id!("@alice:example.org");
        assert!(should_route(sender, own, ts(STARTED_MS), started_at()));
    }

    #[test]
    fn test_only_text_messages_have_a_body() {
        let text = MessageType::Text(TextMessageEventContent::plain("cs!help"));
        assert_eq!(text_body(&text), Some("cs!help"));

        let notice = MessageType::Notice(NoticeMessageEventContent::plain("cs!help"));
        assert_eq!(text_body(&notice), None);
    }
}
