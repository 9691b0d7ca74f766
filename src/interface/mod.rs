//! # Interface Layer
//!
//! User-facing command implementations.

pub mod commands;
