//! Terminal input module.
//!
//! Maps `crossterm` key events into the five [`crate::types::Command`]s the
//! rules engine understands. Keys that map to nothing are ignored.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
