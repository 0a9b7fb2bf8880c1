//! Board module - manages the game grid
//!
//! The board is a 22x10 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (row, col) where row ranges 0..21 (top to bottom), col ranges 0..9
//! (left to right). Rows 0 and 1 are the hidden spawn rows.

use arrayvec::ArrayVec;

use crate::types::{Cell, Location, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, HIDDEN_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 22 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    /// Get cell at (row, col), `None` if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, row: i8, col: i8) -> bool {
        Self::index(row, col).is_none()
    }

    /// Check if every cell of a location is inside the board and empty
    pub fn is_free(&self, location: &Location) -> bool {
        location
            .iter()
            .all(|&(row, col)| self.is_empty_at(row, col))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = row * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the row indices that were cleared (sorted top to bottom).
    ///
    /// Every row above a cleared row drops by one per cleared row beneath it; rows below
    /// the lowest cleared row are untouched. Two-pointer compaction, no allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_row = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_row in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_row) {
                // A settle touches at most 4 rows, so at most 4 can be full.
                if cleared_rows.try_push(read_row).is_err() {
                    write_row -= 1;
                    if write_row != read_row {
                        let src = read_row * width;
                        self.cells.copy_within(src..src + width, write_row * width);
                    }
                }
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    self.cells.copy_within(src..src + width, write_row * width);
                }
            }
        }

        // Clear the remaining rows at the top
        for cell in &mut self.cells[..write_row * width] {
            *cell = None;
        }

        cleared_rows.reverse();
        cleared_rows
    }

    /// Write the same cell value into every coordinate of a location.
    /// Returns false (and writes nothing) if any coordinate is out of bounds.
    pub fn fill(&mut self, location: &Location, cell: Cell) -> bool {
        if location
            .iter()
            .any(|&(row, col)| self.is_out_of_bounds(row, col))
        {
            return false;
        }
        for &(row, col) in location {
            self.set(row, col, cell);
        }
        true
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Iterate over the rows a player sees (hidden spawn rows skipped)
    pub fn visible_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows().skip(HIDDEN_ROWS as usize)
    }

    /// Count filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Fill a whole row with one kind
    pub fn fill_row(&mut self, row: usize, kind: PieceKind) {
        if row >= BOARD_HEIGHT as usize {
            return;
        }
        let start = row * BOARD_WIDTH as usize;
        for cell in &mut self.cells[start..start + BOARD_WIDTH as usize] {
            *cell = Some(kind);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
