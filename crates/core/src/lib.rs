//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of the falling-block game: the field, the shape
//! catalog, collision/merge/rotation and the session that drives a piece
//! through the field. It has **no dependencies** on terminals or input
//! devices, so it is:
//!
//! - **Deterministic**: Same seed produces identical sessions
//! - **Testable**: Every rule is exercised by plain unit tests
//! - **Portable**: Runs headless, in a terminal, or behind any other frontend
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size cell [`Matrix`] and the completed-row sweep
//! - [`pieces`]: the seven shapes and uniform random selection
//! - [`geometry`]: collision test, merge and in-place rotation
//! - [`session`]: [`FieldSession`], the only owner of the field and active piece
//! - [`ticker`]: [`DropTimer`], the gravity schedule
//! - [`rng`]: seedable LCG
//! - [`snapshot`]: read-only frame copies for renderers
//!
//! # Rules
//!
//! - A piece spawns on the top row, centered horizontally
//! - Left/right moves and one-row drops are undone if they collide
//! - Rotation tries alternating sideways nudges before giving up
//! - A drop that collides settles the piece and sweeps completed rows
//! - A spawn that collides clears the whole field
//!
//! # Example
//!
//! ```
//! use blockfall_core::{DropOutcome, FieldSession};
//! use blockfall_types::{Command, PieceKind};
//!
//! let mut session = FieldSession::new(12, 20, 12345);
//! session.spawn_kind(PieceKind::O);
//!
//! session.apply(Command::MoveLeft);
//! assert_eq!(session.active().position().x, 4);
//!
//! // Gravity: one drop once more than the interval has elapsed.
//! assert_eq!(session.advance_time(1001), Some(DropOutcome::Fell));
//! ```

pub mod geometry;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod ticker;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use geometry::{collides, merge, rotate};
pub use grid::{sweep_completed_rows, Matrix};
pub use pieces::{create_piece, create_piece_named, random_shape};
pub use rng::SimpleRng;
pub use session::{ActivePiece, DropOutcome, FieldSession};
pub use snapshot::{ActiveSnapshot, FieldSnapshot};
pub use ticker::DropTimer;
