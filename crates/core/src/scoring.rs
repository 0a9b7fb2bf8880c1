//! Scoring module - line clear points, level progression and gravity cadence
//!
//! Classic tiered scoring: 40 / 100 / 300 / 1200 points for 1-4 lines, multiplied
//! by `level + 1`. Levels advance once per 10 cleared lines and each level shortens
//! the fall timer by 20 ticks down to a floor of 20.

use crate::types::{
    BASE_FALL_TICKS, FALL_TICKS_FLOOR, FALL_TICKS_PER_LEVEL, LINES_PER_LEVEL, LINE_SCORES,
};

/// Calculate line clear score
/// lines: number of lines cleared (0-4)
/// level: level at the moment of the clear (0-based)
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level.saturating_add(1))
}

/// Ticks between two forced gravity drops: `max(500 - 20 * level, 20)`
pub fn ticks_from_level(level: u32) -> u32 {
    BASE_FALL_TICKS
        .saturating_sub(level.saturating_mul(FALL_TICKS_PER_LEVEL))
        .max(FALL_TICKS_FLOOR)
}

/// Whether clearing `cleared` more lines crosses a level boundary,
/// given `total_lines` cleared before this settle.
pub fn crosses_level_threshold(total_lines: u32, cleared: u32) -> bool {
    (total_lines % LINES_PER_LEVEL) + cleared >= LINES_PER_LEVEL
}
