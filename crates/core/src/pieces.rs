//! Pieces module - tetromino shape tables and delta rotation
//!
//! Shapes are `(row, col)` offsets inside a 4x4 box. A piece on the board never
//! stores its offset: its location is always some shape translated by whatever the
//! prior moves accumulated, and rotation adds the per-cell difference between the
//! two shapes to the current location. Cell `i` of one orientation corresponds to
//! cell `i` of every other orientation of the same kind.

use crate::types::{Location, PieceKind, Rotation};

/// Get the shape (cell offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> Location {
    SHAPES[kind_index(kind)][rotation.index()]
}

/// Canonical spawn cells for a piece kind (absolute board coordinates)
pub fn spawn_location(kind: PieceKind) -> Location {
    SPAWN_LOCATIONS[kind_index(kind)]
}

fn kind_index(kind: PieceKind) -> usize {
    match kind {
        PieceKind::I => 0,
        PieceKind::O => 1,
        PieceKind::T => 2,
        PieceKind::S => 3,
        PieceKind::Z => 4,
        PieceKind::J => 5,
        PieceKind::L => 6,
    }
}

/// Shift every cell of a location by the same amount
pub fn translate(location: &Location, d_row: i8, d_col: i8) -> Location {
    location.map(|(row, col)| (row + d_row, col + d_col))
}

/// Rotate a placed piece from one orientation to another.
///
/// Each cell moves by `shape(to)[i] - shape(from)[i]`, so the translation the
/// piece picked up from earlier moves is preserved. The result is not checked
/// against the board.
pub fn rotate_location(
    kind: PieceKind,
    from: Rotation,
    to: Rotation,
    location: &Location,
) -> Location {
    let old_shape = get_shape(kind, from);
    let new_shape = get_shape(kind, to);

    let mut rotated = *location;
    for (i, cell) in rotated.iter_mut().enumerate() {
        cell.0 += new_shape[i].0 - old_shape[i].0;
        cell.1 += new_shape[i].1 - old_shape[i].1;
    }
    rotated
}

#[rustfmt::skip]
const SPAWN_LOCATIONS: [Location; 7] = [
    [(0, 3), (0, 4), (0, 5), (0, 6)], // I
    [(0, 4), (0, 5), (1, 4), (1, 5)], // O
    [(0, 3), (0, 4), (0, 5), (1, 4)], // T
    [(0, 3), (0, 4), (1, 2), (1, 3)], // S
    [(0, 3), (0, 4), (1, 4), (1, 5)], // Z
    [(0, 3), (0, 4), (0, 5), (1, 5)], // J
    [(0, 3), (0, 4), (0, 5), (1, 3)], // L
];

#[rustfmt::skip]
const SHAPES: [[Location; 4]; 7] = [
    // I
    [
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(0, 2), (1, 2), (2, 2), (3, 2)],
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(0, 2), (1, 2), (2, 2), (3, 2)],
    ],
    // O
    [
        [(1, 1), (1, 2), (2, 1), (2, 2)],
        [(1, 1), (1, 2), (2, 1), (2, 2)],
        [(1, 1), (1, 2), (2, 1), (2, 2)],
        [(1, 1), (1, 2), (2, 1), (2, 2)],
    ],
    // T
    [
        [(1, 0), (1, 1), (1, 2), (2, 1)],
        [(0, 1), (1, 0), (1, 1), (2, 1)],
        [(0, 1), (1, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (1, 2)],
    ],
    // S
    [
        [(1, 1), (1, 2), (2, 0), (2, 1)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(1, 1), (1, 2), (2, 0), (2, 1)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
    ],
    // Z
    [
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(0, 2), (1, 1), (1, 2), (2, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(0, 2), (1, 1), (1, 2), (2, 1)],
    ],
    // J
    [
        [(1, 0), (1, 1), (1, 2), (2, 2)],
        [(0, 1), (1, 1), (2, 0), (2, 1)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
        [(0, 1), (0, 2), (1, 1), (2, 1)],
    ],
    // L
    [
        [(1, 0), (1, 1), (1, 2), (2, 0)],
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 2)],
    ],
];
