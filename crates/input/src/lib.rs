//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]. It owns no event
//! loop: the driver polls the terminal, decodes at most one key per tick and
//! passes `Command::None` when nothing was pressed.

pub mod map;

pub use tick_tetris_types as types;

pub use map::{command_or_none, handle_key_event, should_quit};
