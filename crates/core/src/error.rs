use thiserror::Error;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Errors reported by the engine's query surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error(
        "cell ({row}, {col}) is outside the {height}x{width} board",
        height = BOARD_HEIGHT,
        width = BOARD_WIDTH
    )]
    OutOfBounds { row: usize, col: usize },
}

pub type Result<T> = std::result::Result<T, CoreError>;
