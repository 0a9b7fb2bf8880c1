//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental vocabulary used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used by
//! the engine, an input decoder or any presentation layer.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 22 rows (indexed 0-21), of which rows 0 and 1 are hidden spawn rows
//!
//! Coordinates are always `(row, col)` with row 0 at the top.
//!
//! # Fall Timer
//!
//! The engine counts discrete ticks. The number of ticks between two forced
//! gravity drops depends on the level:
//!
//! | Level | Ticks |
//! |-------|-------|
//! | 0 | 500 |
//! | 1 | 480 |
//! | 10 | 300 |
//! | 24+ | 20 (floor) |
//!
//! # Examples
//!
//! ```
//! use tick_tetris_types::{Command, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//!
//! assert_eq!(Rotation::North.rotate_left(), Rotation::West);
//! assert_eq!(Rotation::North.rotate_right().index(), 1);
//!
//! assert_eq!(Command::default(), Command::None);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 22);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (22 rows, including the hidden spawn rows)
pub const BOARD_HEIGHT: u8 = 22;

/// Rows at the top of the board that exist only for spawn overflow
pub const HIDDEN_ROWS: u8 = 2;

/// Fall timer at level 0, in ticks
pub const BASE_FALL_TICKS: u32 = 500;

/// Fall timer reduction per level, in ticks
pub const FALL_TICKS_PER_LEVEL: u32 = 20;

/// The fall timer never drops below this many ticks
pub const FALL_TICKS_FLOOR: u32 = 20;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Seed used by `Default` games
pub const DEFAULT_SEED: u64 = 1;

/// Line clear scoring table (classic tiered scoring)
///
/// Base points for clearing N lines at level 0:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// A single board coordinate, `(row, col)`
pub type Coord = (i8, i8);

/// The four cells covered by a piece (or the four offsets of a shape)
pub type Location = [Coord; 4];

/// The seven tetromino piece kinds
///
/// - **I**: horizontal bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Orientation states of a piece
///
/// The index runs 0..=3 in the order North, East, South, West.
/// Rotating left decreases the index, rotating right increases it (both modulo 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Orientation index (0-3)
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotate left (index - 1 mod 4)
    ///
    /// # Examples
    ///
    /// ```
    /// use tick_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_left(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_left(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_left(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_left(), Rotation::North);
    /// ```
    pub fn rotate_left(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Rotate right (index + 1 mod 4)
    ///
    /// # Examples
    ///
    /// ```
    /// use tick_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_right(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_right(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_right(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_right(), Rotation::North);
    /// ```
    pub fn rotate_right(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }
}

/// Commands accepted by the engine, one per step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Command {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down, settling it if blocked
    SoftDrop,
    /// Drop piece as far as it goes, then settle it
    HardDrop,
    /// Rotate piece left (orientation index - 1)
    RotateLeft,
    /// Rotate piece right (orientation index + 1)
    RotateRight,
    /// Let the tick pass
    #[default]
    None,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;

/// Outcome of the most recent settle, for presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleEvent {
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    pub level_up: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_dimensions_and_timing() {
        assert_eq!(BOARD_WIDTH, 10);
        assert_eq!(BOARD_HEIGHT, 22);
        assert_eq!(HIDDEN_ROWS, 2);
        assert_eq!(BASE_FALL_TICKS, 500);
        assert_eq!(FALL_TICKS_PER_LEVEL, 20);
        assert_eq!(FALL_TICKS_FLOOR, 20);
        assert_eq!(LINES_PER_LEVEL, 10);
    }

    #[test]
    fn rotation_index_follows_left_decrement() {
        let mut r = Rotation::North;
        for expected in [3, 2, 1, 0] {
            r = r.rotate_left();
            assert_eq!(r.index(), expected);
        }
        for expected in [1, 2, 3, 0] {
            r = r.rotate_right();
            assert_eq!(r.index(), expected);
        }
    }

    #[test]
    fn piece_kinds_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
