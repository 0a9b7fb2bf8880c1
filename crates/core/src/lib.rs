//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole rule set of the falling-block engine. It has
//! **zero dependencies** on UI, terminal or I/O:
//!
//! - **Deterministic**: same seed produces the same piece sequence
//! - **Tick driven**: the caller decides how often to call [`GameState::step`]
//! - **Self-consistent**: the active piece is always mirrored into the board
//!
//! # Module Structure
//!
//! - [`board`]: 22x10 grid with bounds checks and line clearing
//! - [`game_state`]: the engine state machine (movement, gravity, settle)
//! - [`pieces`]: shape tables, spawn locations and delta rotation
//! - [`rng`]: uniform seeded piece generator
//! - [`scoring`]: tiered line scores, level threshold, fall-timer cadence
//! - [`snapshot`]: plain copy of the state for presentation layers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every kind is drawn independently, repeats allowed
//! - **Delta rotation**: no wall kicks; a blocked rotation is simply ignored
//! - **Settle**: a piece that cannot descend is settled immediately, full rows are
//!   cleared and the queued piece spawns with a one-row grace fall
//! - **Scoring**: 40 / 100 / 300 / 1200 x (level + 1)
//! - **Levels**: one level per 10 lines, gravity every `max(500 - 20 * level, 20)` ticks
//!
//! # Example
//!
//! ```
//! use tick_tetris_core::GameState;
//! use tick_tetris_types::Command;
//!
//! let mut game = GameState::new(0, 12345);
//!
//! assert!(game.step(Command::MoveRight));
//! assert!(game.step(Command::RotateLeft));
//! assert!(game.step(Command::HardDrop));
//!
//! // One piece settled, a new one is falling.
//! assert_eq!(game.board().filled_count(), 8);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tick_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::CoreError;
pub use game_state::{GameState, Piece};
pub use pieces::{get_shape, rotate_location, spawn_location};
pub use rng::PieceGenerator;
pub use scoring::{crosses_level_threshold, line_clear_score, ticks_from_level};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
