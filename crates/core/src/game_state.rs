//! Game state module - the tick-driven engine
//!
//! Ties together the board, the shape tables, the piece generator and scoring.
//! The driver calls [`GameState::step`] once per tick with one [`Command`]; the engine
//! moves the active piece, applies gravity when the fall timer runs out, settles the
//! piece when it can no longer descend and reports whether the game is still alive.
//!
//! The active piece is always mirrored into the board. Only
//! `update_playfield` rewrites the cells that belong to it.

use crate::board::Board;
use crate::error::{CoreError, Result};
use crate::pieces::{get_shape, rotate_location, spawn_location, translate};
use crate::rng::PieceGenerator;
use crate::scoring::{crosses_level_threshold, line_clear_score, ticks_from_level};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub location: Location,
    pub rotation: Rotation,
}

impl Piece {
    /// Create a piece at its canonical spawn location
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            location: spawn_location(kind),
            rotation: Rotation::North,
        }
    }

    /// Get the shape (cell offsets) for the current rotation
    pub fn shape(&self) -> Location {
        get_shape(self.kind, self.rotation)
    }

    /// Check whether the piece covers (row, col)
    pub fn occupies(&self, row: i8, col: i8) -> bool {
        self.location.contains(&(row, col))
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    next: PieceKind,
    generator: PieceGenerator,
    /// Last settle event (consumed by presenters).
    last_event: Option<SettleEvent>,
    score: u32,
    level: u32,
    lines: u32,
    fall_timer: u32,
    game_over: bool,
}

impl GameState {
    /// Create a new game at the given level with a fixed RNG seed
    pub fn new(level: u32, seed: u64) -> Self {
        Self::with_generator(level, PieceGenerator::new(seed))
    }

    /// Create a new game at the given level with an OS-seeded RNG
    pub fn with_level(level: u32) -> Self {
        Self::with_generator(level, PieceGenerator::from_entropy())
    }

    fn with_generator(level: u32, mut generator: PieceGenerator) -> Self {
        let first = Piece::spawn(generator.draw());
        let next = generator.draw();

        let mut board = Board::new();
        board.fill(&first.location, Some(first.kind));

        Self {
            board,
            active: Some(first),
            next,
            generator,
            last_event: None,
            score: 0,
            level,
            lines: 0,
            fall_timer: ticks_from_level(level),
            game_over: false,
        }
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total lines cleared so far
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Ticks left until the next forced drop
    pub fn fall_timer(&self) -> u32 {
        self.fall_timer
    }

    /// Kind of the queued next piece
    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    /// Preview shape of the queued next piece
    pub fn next_shape(&self) -> Location {
        get_shape(self.next, Rotation::North)
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seed of the piece generator, if the game was built with one
    pub fn seed(&self) -> Option<u64> {
        self.generator.seed()
    }

    /// Cell contents at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the board.
    pub fn piece_at(&self, row: usize, col: usize) -> Cell {
        match self.try_piece_at(row, col) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }

    /// Cell contents at (row, col), or an error outside the board
    pub fn try_piece_at(&self, row: usize, col: usize) -> Result<Cell> {
        let out_of_bounds = CoreError::OutOfBounds { row, col };
        let (Ok(r), Ok(c)) = (i8::try_from(row), i8::try_from(col)) else {
            return Err(out_of_bounds);
        };
        self.board.get(r, c).ok_or(out_of_bounds)
    }

    /// Take and clear the last settle event.
    pub fn take_last_event(&mut self) -> Option<SettleEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (dst, src) in out.board.iter_mut().zip(self.board.rows()) {
            dst.copy_from_slice(src);
        }
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next;
        out.next_shape = self.next_shape();
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.fall_timer = self.fall_timer;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the game by one tick.
    ///
    /// Returns false once a newly spawned piece cannot be placed. After that the
    /// engine is frozen and further calls return false without touching the board.
    pub fn step(&mut self, command: Command) -> bool {
        if self.game_over {
            return false;
        }

        self.fall_timer = self.fall_timer.saturating_sub(1);

        let alive = match command {
            Command::MoveLeft => {
                self.try_move(0, -1);
                true
            }
            Command::MoveRight => {
                self.try_move(0, 1);
                true
            }
            Command::SoftDrop => self.fall_or_settle(),
            Command::HardDrop => self.hard_drop(),
            Command::RotateLeft => {
                self.try_rotate(false);
                true
            }
            Command::RotateRight => {
                self.try_rotate(true);
                true
            }
            Command::None => true,
        };

        if !alive {
            return false;
        }

        // Gravity
        if self.fall_timer == 0 {
            self.fall_timer = ticks_from_level(self.level);
            return self.fall_or_settle();
        }

        true
    }

    /// Check that every cell is inside the board and either empty or already
    /// covered by the active piece.
    fn is_free(&self, location: &Location) -> bool {
        location.iter().all(|&(row, col)| {
            self.board.is_empty_at(row, col)
                || self
                    .active
                    .is_some_and(|active| active.occupies(row, col))
        })
    }

    /// Move the active piece to a new location, rewriting its board cells
    fn update_playfield(&mut self, location: Location, rotation: Rotation) {
        let Some(active) = self.active.as_mut() else {
            return;
        };

        self.board.fill(&active.location, None);
        self.board.fill(&location, Some(active.kind));
        active.location = location;
        active.rotation = rotation;
    }

    /// Try to translate the active piece
    pub(crate) fn try_move(&mut self, d_row: i8, d_col: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let location = translate(&active.location, d_row, d_col);
        if !self.is_free(&location) {
            return false;
        }

        self.update_playfield(location, active.rotation);
        true
    }

    /// Try to rotate the active piece (no wall kicks)
    pub(crate) fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotation = if clockwise {
            active.rotation.rotate_right()
        } else {
            active.rotation.rotate_left()
        };
        let location = rotate_location(active.kind, active.rotation, rotation, &active.location);

        if !self.is_free(&location) {
            return false;
        }

        self.update_playfield(location, rotation);
        true
    }

    /// Descend one row, or settle the piece if it is blocked
    fn fall_or_settle(&mut self) -> bool {
        if self.try_move(1, 0) {
            true
        } else {
            self.settle()
        }
    }

    fn hard_drop(&mut self) -> bool {
        while self.try_move(1, 0) {}
        self.settle()
    }

    /// Clear full rows, score them, advance the level and promote the next piece
    fn settle(&mut self) -> bool {
        let cleared_rows = self.board.clear_full_rows();
        let lines_cleared = cleared_rows.len() as u32;

        let points = line_clear_score(cleared_rows.len(), self.level);
        self.score = self.score.saturating_add(points);

        let level_up = crosses_level_threshold(self.lines, lines_cleared);
        if level_up {
            self.level = self.level.saturating_add(1);
            self.fall_timer = ticks_from_level(self.level);
        }

        self.lines = self.lines.saturating_add(lines_cleared);

        self.last_event = Some(SettleEvent {
            lines_cleared,
            line_clear_score: points,
            level_up,
        });

        self.spawn_next()
    }

    /// Promote the queued piece to active and give it its first one-row fall
    fn spawn_next(&mut self) -> bool {
        let kind = std::mem::replace(&mut self.next, self.generator.draw());
        let piece = Piece::spawn(kind);

        if !self.board.is_free(&piece.location) {
            self.active = None;
            self.game_over = true;
            return false;
        }

        self.board.fill(&piece.location, Some(kind));
        self.active = Some(piece);

        if !self.try_move(1, 0) {
            self.game_over = true;
            return false;
        }

        true
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece with a fresh one of the given kind at spawn
    #[cfg(test)]
    pub(crate) fn force_active(&mut self, kind: PieceKind) {
        if let Some(active) = self.active {
            self.board.fill(&active.location, None);
        }
        let piece = Piece::spawn(kind);
        self.board.fill(&piece.location, Some(kind));
        self.active = Some(piece);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0, DEFAULT_SEED)
    }
}
