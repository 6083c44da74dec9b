use crate::grid::Matrix;
use crate::pieces::create_piece;
use crate::types::{PieceKind, Position, DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};

/// Copy of the active piece as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub matrix: Matrix,
    pub position: Position,
}

/// Read-only copy of everything drawn in one frame.
///
/// Reuse one instance with [`FieldSession::snapshot_into`](crate::FieldSession::snapshot_into)
/// to avoid reallocating every frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSnapshot {
    pub grid: Matrix,
    pub active: ActiveSnapshot,
}

impl FieldSnapshot {
    /// Cell value at `(x, y)` with the active piece drawn over the field.
    ///
    /// Returns `None` outside the field.
    pub fn composited(&self, x: i32, y: i32) -> Option<u8> {
        let settled = self.grid.get(x, y)?;
        let pos = self.active.position;
        match self.active.matrix.get(x - pos.x, y - pos.y) {
            Some(v) if v != 0 => Some(v),
            _ => Some(settled),
        }
    }
}

impl Default for FieldSnapshot {
    fn default() -> Self {
        Self {
            grid: Matrix::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT),
            active: ActiveSnapshot {
                kind: PieceKind::T,
                matrix: create_piece(PieceKind::T),
                position: Position::default(),
            },
        }
    }
}
