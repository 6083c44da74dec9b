//! Field session - owns the field and the active piece
//!
//! This module ties the grid, the shape catalog and the geometry functions
//! together. Every operation runs to completion and resolves illegal moves by
//! rolling back, so none of them fail.
//!
//! Lifecycle of a piece: it falls until a drop collides, then it is merged
//! into the field, completed rows are swept and a new piece is spawned. If
//! that new piece already overlaps the field, the whole field is cleared and
//! play continues.

use tracing::{debug, info, trace};

use crate::geometry::{collides, merge, rotate};
use crate::grid::{sweep_completed_rows, Matrix};
use crate::pieces::{create_piece, random_shape};
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, FieldSnapshot};
use crate::ticker::DropTimer;
use crate::types::{
    Command, PieceKind, Position, RotationDirection, DEFAULT_DROP_INTERVAL_MS, MIN_FIELD_DIM,
};

/// The falling piece: its own matrix plus where it sits in the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    kind: PieceKind,
    matrix: Matrix,
    position: Position,
}

impl ActivePiece {
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// Result of a single [`FieldSession::drop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row.
    Fell,
    /// The piece settled and a new one spawned cleanly.
    Locked { rows_cleared: usize },
    /// The piece settled, but the next one collided on spawn and the field was reset.
    ToppedOut { rows_cleared: usize },
}

impl DropOutcome {
    pub fn locked(&self) -> bool {
        !matches!(self, DropOutcome::Fell)
    }
}

/// A single game field and its active piece
#[derive(Debug, Clone)]
pub struct FieldSession {
    grid: Matrix,
    active: ActivePiece,
    rng: SimpleRng,
    drop_timer: DropTimer,
    /// Pieces spawned so far, including the first.
    pieces_spawned: u32,
    /// How many times the field was reset by a blocked spawn.
    top_outs: u32,
}

impl FieldSession {
    /// Create an empty `width` x `height` field and spawn the first piece.
    ///
    /// Panics if either dimension is below [`MIN_FIELD_DIM`]; every
    /// constructor shares this check.
    pub fn new(width: usize, height: usize, seed: u32) -> Self {
        Self::with_config(width, height, DEFAULT_DROP_INTERVAL_MS, seed)
    }

    pub fn with_config(width: usize, height: usize, drop_interval_ms: u32, seed: u32) -> Self {
        Self::build(Matrix::new(width, height), drop_interval_ms, seed, None)
    }

    /// Start from an existing field. The first spawn applies the usual
    /// top-out rule, so a field blocked at the spawn point comes back empty.
    pub fn from_grid(grid: Matrix, seed: u32) -> Self {
        Self::build(grid, DEFAULT_DROP_INTERVAL_MS, seed, None)
    }

    /// Like [`FieldSession::from_grid`], but the first piece is `first`
    /// instead of a random one. Later spawns are random.
    pub fn with_first_piece(grid: Matrix, first: PieceKind, seed: u32) -> Self {
        Self::build(grid, DEFAULT_DROP_INTERVAL_MS, seed, Some(first))
    }

    fn build(grid: Matrix, drop_interval_ms: u32, seed: u32, first: Option<PieceKind>) -> Self {
        assert!(
            grid.width() >= MIN_FIELD_DIM && grid.height() >= MIN_FIELD_DIM,
            "field must be at least {0}x{0}, got {1}x{2}",
            MIN_FIELD_DIM,
            grid.width(),
            grid.height()
        );
        let mut rng = SimpleRng::new(seed);
        let kind = first.unwrap_or_else(|| random_shape(&mut rng));
        let mut session = Self {
            grid,
            active: ActivePiece {
                kind,
                matrix: create_piece(kind),
                position: Position::default(),
            },
            rng,
            drop_timer: DropTimer::new(drop_interval_ms),
            pieces_spawned: 0,
            top_outs: 0,
        };
        session.spawn_kind(kind);
        session
    }

    pub fn grid(&self) -> &Matrix {
        &self.grid
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn drop_timer(&self) -> &DropTimer {
        &self.drop_timer
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn top_outs(&self) -> u32 {
        self.top_outs
    }

    pub fn snapshot_into(&self, out: &mut FieldSnapshot) {
        out.grid.clone_from(&self.grid);
        out.active.kind = self.active.kind;
        out.active.matrix.clone_from(&self.active.matrix);
        out.active.position = self.active.position;
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            grid: self.grid.clone(),
            active: ActiveSnapshot {
                kind: self.active.kind,
                matrix: self.active.matrix.clone(),
                position: self.active.position,
            },
        }
    }

    fn active_collides(&self) -> bool {
        collides(&self.grid, &self.active.matrix, self.active.position)
    }

    /// Spawn a random piece.
    ///
    /// Returns false when the piece collided on arrival and the field was cleared.
    pub fn spawn(&mut self) -> bool {
        let kind = random_shape(&mut self.rng);
        self.spawn_kind(kind)
    }

    /// Spawn a specific piece, centered horizontally on the top row.
    ///
    /// Returns false when the piece collided on arrival and the field was cleared.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        let matrix = create_piece(kind);
        let x = (self.grid.width() / 2) as i32 - (matrix.width() / 2) as i32;

        self.active = ActivePiece {
            kind,
            matrix,
            position: Position::new(x, 0),
        };
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);

        if self.active_collides() {
            self.grid.clear();
            self.top_outs = self.top_outs.wrapping_add(1);
            info!(
                kind = kind.as_str(),
                top_outs = self.top_outs,
                "spawn blocked, field reset"
            );
            return false;
        }

        debug!(kind = kind.as_str(), x, "spawned piece");
        true
    }

    /// Shift the piece one column. `direction` is -1 (left) or +1 (right).
    ///
    /// Returns false, leaving the piece where it was, if the shift collides.
    pub fn move_horizontal(&mut self, direction: i32) -> bool {
        debug_assert!(
            direction == -1 || direction == 1,
            "horizontal direction must be -1 or 1, got {}",
            direction
        );

        let previous_x = self.active.position.x;
        self.active.position.x += direction;
        if self.active_collides() {
            self.active.position.x = previous_x;
            trace!(direction, "move blocked");
            return false;
        }
        true
    }

    /// Move the piece down one row, settling it if it cannot.
    ///
    /// Settling merges the piece into the field, sweeps completed rows and
    /// spawns the next piece. The drop timer is reset either way.
    pub fn drop(&mut self) -> DropOutcome {
        self.drop_timer.reset();

        self.active.position.y += 1;
        if !self.active_collides() {
            return DropOutcome::Fell;
        }

        self.active.position.y -= 1;
        merge(&mut self.grid, &self.active.matrix, self.active.position);
        let rows_cleared = sweep_completed_rows(&mut self.grid);
        debug!(
            kind = self.active.kind.as_str(),
            x = self.active.position.x,
            y = self.active.position.y,
            rows_cleared,
            "piece locked"
        );

        if self.spawn() {
            DropOutcome::Locked { rows_cleared }
        } else {
            DropOutcome::ToppedOut { rows_cleared }
        }
    }

    /// Rotate the piece, nudging it sideways if the turn collides.
    ///
    /// Offsets `1, -2, 3, -4, ...` are applied one after another to `x`, so the
    /// piece is tried one column right, then one left, then two right, and so
    /// on. The search stops once the next offset would exceed the piece width,
    /// in which case the rotation is undone and false is returned.
    pub fn rotate_active(&mut self, direction: RotationDirection) -> bool {
        let original_x = self.active.position.x;
        let width = self.active.matrix.width() as i32;
        let mut offset: i32 = 1;

        rotate(&mut self.active.matrix, direction);
        while self.active_collides() {
            self.active.position.x += offset;
            offset = -(offset + offset.signum());
            if offset > width {
                rotate(&mut self.active.matrix, direction.reverse());
                self.active.position.x = original_x;
                trace!(?direction, "rotation blocked");
                return false;
            }
        }
        true
    }

    /// Advance gravity by `delta_ms`. Returns the drop outcome if a drop was due.
    pub fn advance_time(&mut self, delta_ms: u32) -> Option<DropOutcome> {
        if self.drop_timer.advance(delta_ms) {
            Some(self.drop())
        } else {
            None
        }
    }

    /// Apply one input command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeft => {
                self.move_horizontal(-1);
            }
            Command::MoveRight => {
                self.move_horizontal(1);
            }
            Command::SoftDrop => {
                self.drop();
            }
            Command::RotateCcw => {
                self.rotate_active(RotationDirection::CounterClockwise);
            }
            Command::RotateCw => {
                self.rotate_active(RotationDirection::Clockwise);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(kind: PieceKind) -> FieldSession {
        let mut s = FieldSession::new(12, 20, 1);
        s.spawn_kind(kind);
        s
    }

    #[test]
    #[should_panic(expected = "field must be at least 4x4")]
    fn test_field_too_short_for_i_is_rejected() {
        let _ = FieldSession::with_first_piece(Matrix::new(12, 3), PieceKind::I, 1);
    }

    #[test]
    #[should_panic(expected = "field must be at least 4x4")]
    fn test_field_too_narrow_is_rejected() {
        let _ = FieldSession::new(3, 20, 1);
    }

    #[test]
    fn test_smallest_field_holds_every_shape() {
        for kind in PieceKind::ALL {
            let mut s = FieldSession::with_first_piece(Matrix::new(4, 4), kind, 1);
            assert_eq!(s.top_outs(), 0, "{:?}", kind);
            assert!(!s.active_collides());
            while !s.drop().locked() {}
            assert!(!s.active_collides());
        }
    }

    #[test]
    fn test_spawn_centers_piece() {
        let s = session_with(PieceKind::O);
        assert_eq!(s.active().position(), Position::new(5, 0));

        let s = session_with(PieceKind::I);
        assert_eq!(s.active().position(), Position::new(4, 0));

        let s = session_with(PieceKind::T);
        assert_eq!(s.active().position(), Position::new(5, 0));
    }

    #[test]
    fn test_drop_falls_then_locks() {
        let mut s = session_with(PieceKind::O);
        for _ in 0..18 {
            assert_eq!(s.drop(), DropOutcome::Fell);
        }
        assert_eq!(s.active().position().y, 18);

        let spawned = s.pieces_spawned();
        assert_eq!(s.drop(), DropOutcome::Locked { rows_cleared: 0 });
        assert_eq!(s.pieces_spawned(), spawned + 1);
        assert_eq!(s.grid().get(5, 18), Some(2));
        assert_eq!(s.grid().get(6, 19), Some(2));
        assert_eq!(s.active().position().y, 0);
    }

    #[test]
    fn test_drop_resets_timer() {
        let mut s = session_with(PieceKind::O);
        assert!(s.advance_time(700).is_none());
        s.drop();
        assert_eq!(s.drop_timer().accumulated_ms(), 0);
        assert!(s.advance_time(700).is_none());
        assert_eq!(s.advance_time(301), Some(DropOutcome::Fell));
        assert_eq!(s.drop_timer().accumulated_ms(), 0);
    }

    #[test]
    fn test_rotate_in_open_field_keeps_position() {
        let mut s = session_with(PieceKind::T);
        let before = s.active().position();
        assert!(s.rotate_active(RotationDirection::Clockwise));
        assert_eq!(s.active().position(), before);
        assert_ne!(s.active().matrix(), &create_piece(PieceKind::T));
    }

    #[test]
    fn test_apply_maps_commands() {
        let mut s = session_with(PieceKind::O);
        s.apply(Command::MoveLeft);
        assert_eq!(s.active().position().x, 4);
        s.apply(Command::MoveRight);
        s.apply(Command::MoveRight);
        assert_eq!(s.active().position().x, 6);
        s.apply(Command::SoftDrop);
        assert_eq!(s.active().position().y, 1);
    }
}
