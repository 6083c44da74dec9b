//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the rules engine, the key mapping and the terminal view alike.
//!
//! # Cells
//!
//! A field cell is a small integer: `0` is empty and `1..=7` is an occupied
//! cell tagged with the color id of the piece that settled there.
//!
//! | Piece | Color id |
//! |-------|----------|
//! | T | 1 |
//! | O | 2 |
//! | L | 3 |
//! | J | 4 |
//! | I | 5 |
//! | S | 6 |
//! | Z | 7 |
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_DROP_INTERVAL_MS` | 1000 | Gravity interval |
//! | `FRAME_MS` | 16 | Frame pacing of the terminal loop (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, PieceKind, RotationDirection};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.color_id(), 1);
//!
//! assert_eq!(Command::from_str("rotateCw"), Some(Command::RotateCw));
//! assert_eq!(RotationDirection::from_sign(-1), RotationDirection::CounterClockwise);
//! ```

/// A single field or piece cell. `0` is empty, `1..=7` is a piece color id.
pub type Cell = u8;

/// The empty cell value.
pub const EMPTY: Cell = 0;

/// Default field width in cells (12 columns)
pub const DEFAULT_FIELD_WIDTH: usize = 12;

/// Default field height in cells (20 rows)
pub const DEFAULT_FIELD_HEIGHT: usize = 20;

/// Smallest accepted field dimension; the I piece needs a 4-wide bounding box.
pub const MIN_FIELD_DIM: usize = 4;

/// Largest field dimension the frontend accepts.
pub const MAX_FIELD_DIM: usize = 200;

/// Gravity interval (1000ms = 1 second per row)
pub const DEFAULT_DROP_INTERVAL_MS: u32 = 1000;

/// Frame interval of the terminal loop in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// The seven piece shapes
///
/// Each shape owns a fixed color id used to tag its cells:
/// - **T**: 1
/// - **O**: 2, the only 2x2 shape
/// - **L**: 3
/// - **J**: 4 (mirror of L)
/// - **I**: 5, padded to 4x4
/// - **S**: 6
/// - **Z**: 7 (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    O,
    L,
    J,
    I,
    S,
    Z,
}

impl PieceKind {
    /// All shapes, ordered by color id.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Color id written into every occupied cell of this shape.
    pub fn color_id(&self) -> Cell {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::I => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::color_id`]. Returns `None` for `0` and out-of-range ids.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_color_id(5), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_color_id(0), None);
    /// assert_eq!(PieceKind::from_color_id(8), None);
    /// ```
    pub fn from_color_id(id: Cell) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "t" => Some(PieceKind::T),
            "o" => Some(PieceKind::O),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "i" => Some(PieceKind::I),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "T",
            PieceKind::O => "O",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::I => "I",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// Direction of a quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// Map a signed direction: positive is clockwise, zero or negative is counter-clockwise.
    pub fn from_sign(direction: i32) -> Self {
        if direction > 0 {
            RotationDirection::Clockwise
        } else {
            RotationDirection::CounterClockwise
        }
    }

    /// The opposite turn; rotating one way then the other is the identity.
    pub fn reverse(&self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

/// Top-left offset of a piece matrix in field coordinates.
///
/// `y` grows downward. `x` may be negative or reach past the right edge when
/// the piece's empty padding hangs outside the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Abstract commands produced by the input layer
///
/// These are the only inputs the rules engine understands; anything else the
/// player presses is dropped before it reaches the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one row (same step gravity takes)
    SoftDrop,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Rotate piece 90° clockwise
    RotateCw,
}

impl Command {
    /// Parse command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("SOFTDROP"), Some(Command::SoftDrop));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotateccw" => Some(Command::RotateCcw),
            "rotatecw" => Some(Command::RotateCw),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::RotateCcw => "rotateCcw",
            Command::RotateCw => "rotateCw",
        }
    }
}
