//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` events. It maps key events into
//! [`GameCommand`](crate::types::GameCommand)s; every press and every
//! auto-repeat yields one command.

pub mod map;

pub use blockfall_types as types;

pub use map::{accepts_event_kind, handle_key_event, should_quit};
