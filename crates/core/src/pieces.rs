//! Pieces module - the shape catalog
//!
//! Every shape is a square matrix (2x2 for O, 3x3 or 4x4 padded with empty
//! cells for the rest) so it can be rotated in place. Occupied cells carry the
//! shape's color id.
//!
//! The live piece is mutated by rotation, so the catalog always hands out a
//! freshly allocated matrix rather than a shared template.

use crate::grid::Matrix;
use crate::rng::SimpleRng;
use crate::types::{Cell, PieceKind};

const T_SHAPE: [[Cell; 3]; 3] = [[0, 0, 0], [1, 1, 1], [0, 1, 0]];
const O_SHAPE: [[Cell; 2]; 2] = [[2, 2], [2, 2]];
const L_SHAPE: [[Cell; 3]; 3] = [[0, 3, 0], [0, 3, 0], [0, 3, 3]];
const J_SHAPE: [[Cell; 3]; 3] = [[0, 4, 0], [0, 4, 0], [4, 4, 0]];
const I_SHAPE: [[Cell; 4]; 4] = [[0, 5, 0, 0], [0, 5, 0, 0], [0, 5, 0, 0], [0, 5, 0, 0]];
const S_SHAPE: [[Cell; 3]; 3] = [[0, 6, 6], [6, 6, 0], [0, 0, 0]];
const Z_SHAPE: [[Cell; 3]; 3] = [[7, 7, 0], [0, 7, 7], [0, 0, 0]];

/// Create a fresh matrix for a piece kind in its spawn orientation
pub fn create_piece(kind: PieceKind) -> Matrix {
    match kind {
        PieceKind::T => Matrix::from_rows(&T_SHAPE),
        PieceKind::O => Matrix::from_rows(&O_SHAPE),
        PieceKind::L => Matrix::from_rows(&L_SHAPE),
        PieceKind::J => Matrix::from_rows(&J_SHAPE),
        PieceKind::I => Matrix::from_rows(&I_SHAPE),
        PieceKind::S => Matrix::from_rows(&S_SHAPE),
        PieceKind::Z => Matrix::from_rows(&Z_SHAPE),
    }
}

/// Create a piece by its single-letter name (case-insensitive).
///
/// Panics on a name outside `I O T S Z J L`.
pub fn create_piece_named(name: &str) -> Matrix {
    match PieceKind::from_str(name) {
        Some(kind) => create_piece(kind),
        None => panic!("unknown piece shape: {:?}", name),
    }
}

/// Pick one of the seven shapes with equal probability
pub fn random_shape(rng: &mut SimpleRng) -> PieceKind {
    PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_is_square_and_single_colored() {
        for kind in PieceKind::ALL {
            let m = create_piece(kind);
            assert!(m.is_square(), "{:?} is not square", kind);
            assert_eq!(m.occupied().count(), 4, "{:?} should have four cells", kind);
            assert!(m.occupied().all(|(_, _, v)| v == kind.color_id()));
        }
    }

    #[test]
    fn test_bounding_boxes() {
        assert_eq!(create_piece(PieceKind::O).width(), 2);
        assert_eq!(create_piece(PieceKind::I).width(), 4);
        for kind in [PieceKind::T, PieceKind::L, PieceKind::J, PieceKind::S, PieceKind::Z] {
            assert_eq!(create_piece(kind).width(), 3);
        }
    }

    #[test]
    fn test_fresh_instances_do_not_alias() {
        let mut a = create_piece(PieceKind::T);
        let b = create_piece(PieceKind::T);
        a.set(0, 0, 1);
        assert_ne!(a, b);
        assert_eq!(create_piece(PieceKind::T), b);
    }

    #[test]
    #[should_panic(expected = "unknown piece shape")]
    fn test_unknown_name_panics() {
        let _ = create_piece_named("X");
    }

    #[test]
    fn test_random_shape_covers_catalog() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let kind = random_shape(&mut rng);
            seen[(kind.color_id() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "not every shape drawn: {:?}", seen);
    }
}
