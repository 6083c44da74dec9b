//! Geometry module - collision, merge and rotation over matrices
//!
//! These are free functions over a field grid, a piece matrix and the piece's
//! top-left offset. None of them keep state.

use crate::grid::Matrix;
use crate::types::{Position, RotationDirection, EMPTY};

/// Check whether `piece` placed at `pos` overlaps anything.
///
/// A piece cell landing outside the grid (any side) counts as a hit, as does
/// one landing on an occupied field cell. Empty piece cells are ignored, so
/// the padding of a bounding box may hang over the edge freely.
pub fn collides(grid: &Matrix, piece: &Matrix, pos: Position) -> bool {
    piece.occupied().any(|(x, y, _)| {
        let gx = pos.x + x as i32;
        let gy = pos.y + y as i32;
        !matches!(grid.get(gx, gy), Some(EMPTY))
    })
}

/// Write every occupied piece cell into the grid.
///
/// The caller must have checked [`collides`] first; this does not re-check in
/// release builds.
pub fn merge(grid: &mut Matrix, piece: &Matrix, pos: Position) {
    debug_assert!(
        !collides(grid, piece, pos),
        "merge at ({}, {}) overlaps the field",
        pos.x,
        pos.y
    );

    for (x, y, value) in piece.occupied() {
        grid.set(pos.x + x as i32, pos.y + y as i32, value);
    }
}

/// Rotate a square matrix a quarter turn in place.
///
/// Transpose, then reverse each row for clockwise or reverse the row order
/// for counter-clockwise. Panics on a non-square matrix.
pub fn rotate(matrix: &mut Matrix, direction: RotationDirection) {
    assert!(
        matrix.is_square(),
        "cannot rotate a {}x{} matrix",
        matrix.width(),
        matrix.height()
    );

    let n = matrix.width();
    for y in 0..n {
        for x in 0..y {
            matrix.swap((x, y), (y, x));
        }
    }

    match direction {
        RotationDirection::Clockwise => {
            for y in 0..n {
                matrix.row_mut(y).reverse();
            }
        }
        RotationDirection::CounterClockwise => matrix.reverse_rows(),
    }
}
