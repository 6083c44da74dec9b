//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the field is drawn into a plain
//! framebuffer which is then flushed to the terminal as a diff.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Only read session state through snapshots
//! - Allow precise control over aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{palette, GameView, Viewport, BACKGROUND};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
