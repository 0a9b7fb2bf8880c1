use crate::game_state::Piece;
use crate::types::{Cell, Location, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, HIDDEN_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub location: Location,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            location: value.location,
        }
    }
}

/// Everything a presentation layer reads after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub next_shape: Location,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_timer: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Reset to the empty snapshot
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Rows below the hidden spawn rows
    pub fn visible_board(&self) -> &[[Cell; BOARD_WIDTH as usize]] {
        &self.board[HIDDEN_ROWS as usize..]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: PieceKind::I,
            next_shape: [(0, 0); 4],
            score: 0,
            level: 0,
            lines: 0,
            fall_timer: 0,
            game_over: false,
        }
    }
}
