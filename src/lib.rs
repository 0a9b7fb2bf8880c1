//! Tick Tetris (workspace facade crate).
//!
//! Re-exports the member crates as `tick_tetris::{core, input, types}` so drivers
//! and presentation layers depend on a single package.

pub use tick_tetris_core as core;
pub use tick_tetris_input as input;
pub use tick_tetris_types as types;
