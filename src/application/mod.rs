//! # Application Layer
//!
//! Contains the command dispatch logic of the bot: the registry, message parsing,
//! routing and failure reporting.

pub mod failure;
pub mod parsing;
pub mod registry;
pub mod router;
