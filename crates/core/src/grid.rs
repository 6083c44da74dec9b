//! Grid module - the cell matrix shared by the field and the active piece
//!
//! A [`Matrix`] is a fixed-size grid of cells stored as a flat row-major array.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Dimensions are fixed at construction; nothing in this module resizes a matrix.

use crate::types::{Cell, EMPTY};

/// Rectangular cell matrix with flat row-major storage
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Matrix {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Clone for Matrix {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: self.cells.clone(),
        }
    }

    /// Reuses `self`'s cell buffer when it is large enough.
    fn clone_from(&mut self, source: &Self) {
        self.width = source.width;
        self.height = source.height;
        self.cells.clone_from(&source.cells);
    }
}

impl Matrix {
    /// Create an all-empty matrix.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "matrix dimensions must be non-zero, got {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    /// Build a matrix from fixed-width rows.
    ///
    /// Panics on an empty input or zero-width rows.
    pub fn from_rows<const N: usize>(rows: &[[Cell; N]]) -> Self {
        Self::from_slices(rows.iter().map(|row| &row[..]))
    }

    /// Build a matrix from owned rows.
    ///
    /// Panics on an empty or ragged input.
    pub fn from_vec_rows(rows: &[Vec<Cell>]) -> Self {
        Self::from_slices(rows.iter().map(|row| row.as_slice()))
    }

    fn from_slices<'a>(rows: impl Iterator<Item = &'a [Cell]>) -> Self {
        let mut width = 0;
        let mut height = 0;
        let mut cells = Vec::new();

        for (y, row) in rows.enumerate() {
            if y == 0 {
                width = row.len();
                assert!(width > 0, "matrix needs at least one column");
            }
            assert_eq!(row.len(), width, "row {} has {} cells, expected {}", y, row.len(), width);
            cells.extend_from_slice(row);
            height += 1;
        }
        assert!(height > 0, "matrix needs at least one row");

        Self {
            width,
            height,
            cells,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds on either axis
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    #[inline(always)]
    pub(crate) fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        let ia = a.1 * self.width + a.0;
        let ib = b.1 * self.width + b.0;
        self.cells.swap(ia, ib);
    }

    /// Borrow row `y`.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        let start = y * self.width;
        &mut self.cells[start..start + self.width]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Reverse the order of rows (top becomes bottom).
    pub(crate) fn reverse_rows(&mut self) {
        let h = self.height;
        for y in 0..h / 2 {
            for x in 0..self.width {
                self.swap((x, y), (x, h - 1 - y));
            }
        }
    }

    /// Iterate occupied cells as `(x, y, value)`.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != EMPTY)
            .map(move |(i, &v)| (i % width, i / width, v))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    /// Remove row `y`, shift every row above it down by one and put an empty
    /// row at the top. Height is unchanged.
    pub fn remove_row(&mut self, y: usize) {
        assert!(y < self.height, "row {} out of range (height {})", y, self.height);

        let width = self.width;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.row_mut(0).fill(EMPTY);
    }

    /// Set every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == EMPTY)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert to nested rows for testing/display
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

/// Remove every completed row, scanning from the bottom up.
///
/// Row 0 is never itself tested. After a removal the same index is examined
/// again since the row above has just shifted into it. Returns the number of
/// rows removed.
pub fn sweep_completed_rows(grid: &mut Matrix) -> usize {
    let mut removed = 0;
    let mut y = grid.height() - 1;

    while y > 0 {
        if grid.is_row_full(y) {
            grid.remove_row(y);
            removed += 1;
        } else {
            y -= 1;
        }
    }

    removed
}
