//! # Main Entry Point
//!
//! Initializes the bot:
//! - Domain: Configuration and Types
//! - Infrastructure: Matrix, Logging
//! - Application: Registry, Router, Failure Handler
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;
#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::SyncRoomMessageEvent,
    },
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::registry::CommandRegistry;
use crate::application::router::CommandRouter;
use crate::domain::config::{AppConfig, validate_prefix};
use crate::infrastructure::matrix::MatrixMessage;

/// Chat command bot for Matrix rooms.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "data/config.yaml")]
    config: PathBuf,

    /// Override the command prefix from the config file
    #[arg(short, long)]
    prefix: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load Configuration
    let mut config = AppConfig::load(&args.config)?;
    if let Some(prefix) = args.prefix {
        validate_prefix(&prefix).context("Invalid --prefix")?;
        config.bot.prefix = prefix;
    }

    // 2. Logging Setup
    let _guard = infrastructure::logging::init(&config.logging)?;
    tracing::info!("Starting CS Bot...");
    tracing::info!(
        "{}",
        strings::logs::config_loaded(&config.services.matrix.username, &config.bot.prefix)
    );

    // 3. Register Commands (before any event is delivered)
    let mut registry = CommandRegistry::new();
    interface::commands::register_all(&mut registry, &config.bot.prefix)?;
    tracing::info!(
        "{}",
        strings::logs::commands_registered(registry.len(), &registry.names())
    );
    interface::commands::check_registry(&registry, &config.bot.prefix);
    let router = Arc::new(CommandRouter::new(
        config.bot.prefix.clone(),
        Arc::new(registry),
    ));

    // 4. Matrix Setup
    let client = infrastructure::matrix::login(&config.services.matrix).await?;

    // 5. Event Handlers
    let start_time = std::time::SystemTime::now();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = router.clone();
        async move {
            let Some(message) = MatrixMessage::from_event(&ev, &room, start_time) else {
                return;
            };
            let outcome = router.route(Arc::new(message)).await;
            tracing::debug!("Dispatch outcome: {:?}", outcome);
        }
    });

    if config.bot.auto_join {
        client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
            if ev.content.membership == MembershipState::Invite
                && let Err(e) = room.join().await
            {
                tracing::warn!(
                    "{}",
                    strings::logs::join_invite_fail(room.room_id().as_str(), &e.to_string())
                );
            }
        });
    }

    // 6. Sync Loop
    tracing::info!("{}", strings::logs::SYNC_LOOP_START);
    client
        .sync(SyncSettings::default())
        .await
        .context("Matrix sync failed")?;

    Ok(())
}
