//! Shapes module - static orientation tables for the seven tetrominoes
//!
//! Every orientation is a 4x4 grid indexed column first: `grid[col][row]`, so
//! each inner array of a table below is one column of the piece, top to bottom.
//! A nonzero cell belongs to the piece and holds the kind's color id.
//! Use [`board_view`] to get a grid in the same `[row][col]` order as the board.
//! Orientation lists have 1 entry (O), 2 entries (I, Z, S) or 4 entries (T, L, J);
//! rotating cycles through the list. There is no wall-kick table.

use crate::types::{PieceKind, MINOS_PER_PIECE, SHAPE_SIZE};

/// One orientation of a piece
pub type ShapeGrid = [[u8; SHAPE_SIZE]; SHAPE_SIZE];

const I_SHAPES: [ShapeGrid; 2] = [
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
];

const Z_SHAPES: [ShapeGrid; 2] = [
    [[0, 0, 0, 0], [2, 2, 0, 0], [0, 2, 2, 0], [0, 0, 0, 0]],
    [[0, 0, 2, 0], [0, 2, 2, 0], [0, 2, 0, 0], [0, 0, 0, 0]],
];

const S_SHAPES: [ShapeGrid; 2] = [
    [[0, 0, 0, 0], [0, 3, 3, 0], [3, 3, 0, 0], [0, 0, 0, 0]],
    [[0, 3, 0, 0], [0, 3, 3, 0], [0, 0, 3, 0], [0, 0, 0, 0]],
];

const T_SHAPES: [ShapeGrid; 4] = [
    [[0, 0, 0, 0], [0, 4, 0, 0], [4, 4, 4, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [0, 4, 0, 0], [0, 4, 4, 0], [0, 4, 0, 0]],
    [[0, 0, 0, 0], [0, 0, 0, 0], [4, 4, 4, 0], [0, 4, 0, 0]],
    [[0, 0, 0, 0], [0, 4, 0, 0], [4, 4, 0, 0], [0, 4, 0, 0]],
];

const L_SHAPES: [ShapeGrid; 4] = [
    [[0, 0, 0, 0], [0, 0, 5, 0], [5, 5, 5, 0], [0, 0, 0, 0]],
    [[0, 5, 0, 0], [0, 5, 0, 0], [0, 5, 5, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [5, 5, 5, 0], [5, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 5, 5, 0], [0, 0, 5, 0], [0, 0, 5, 0], [0, 0, 0, 0]],
];

const J_SHAPES: [ShapeGrid; 4] = [
    [[0, 0, 0, 0], [0, 6, 0, 0], [0, 6, 6, 6], [0, 0, 0, 0]],
    [[0, 6, 6, 0], [0, 6, 0, 0], [0, 6, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [0, 6, 6, 6], [0, 0, 0, 6], [0, 0, 0, 0]],
    [[0, 0, 6, 0], [0, 0, 6, 0], [0, 6, 6, 0], [0, 0, 0, 0]],
];

const O_SHAPES: [ShapeGrid; 1] = [[[0, 0, 0, 0], [0, 7, 7, 0], [0, 7, 7, 0], [0, 0, 0, 0]]];

/// Ordered orientation list for a piece kind
pub fn orientations(kind: PieceKind) -> &'static [ShapeGrid] {
    match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::L => &L_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::O => &O_SHAPES,
    }
}

/// Number of distinct orientations of a piece kind
pub fn orientation_count(kind: PieceKind) -> usize {
    orientations(kind).len()
}

/// Get the grid for a kind and rotation state
///
/// `rotation` must be below [`orientation_count`]; an out-of-range index is a
/// caller bug and panics.
pub fn get_shape(kind: PieceKind, rotation: usize) -> &'static ShapeGrid {
    &orientations(kind)[rotation]
}

/// Spawn orientation (rotation state 0)
pub fn get_spawn_shape(kind: PieceKind) -> &'static ShapeGrid {
    get_shape(kind, 0)
}

/// Rotation state after one clockwise turn
pub fn rotate_cw(kind: PieceKind, rotation: usize) -> usize {
    (rotation + 1) % orientation_count(kind)
}

/// Rotation state after one counter-clockwise turn
pub fn rotate_ccw(kind: PieceKind, rotation: usize) -> usize {
    let n = orientation_count(kind) as isize;
    (rotation as isize - 1).rem_euclid(n) as usize
}

/// Filled cells of a grid as `(col, row, color)`, column by column
pub fn minos(shape: &ShapeGrid) -> impl Iterator<Item = (i8, i8, u8)> + '_ {
    shape.iter().enumerate().flat_map(|(col, column)| {
        column
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(move |(row, &v)| (col as i8, row as i8, v))
    })
}

/// The grid transposed to `[row][col]`, as it appears on the board
pub fn board_view(shape: &ShapeGrid) -> ShapeGrid {
    let mut view = [[0; SHAPE_SIZE]; SHAPE_SIZE];
    for (col, row, v) in minos(shape) {
        view[row as usize][col as usize] = v;
    }
    view
}

/// Number of filled cells in a grid
pub fn filled_count(shape: &ShapeGrid) -> usize {
    shape.iter().flatten().filter(|&&v| v != 0).count()
}

/// Check the tetromino invariant for a single grid
pub fn is_tetromino(shape: &ShapeGrid) -> bool {
    filled_count(shape) == MINOS_PER_PIECE
}
