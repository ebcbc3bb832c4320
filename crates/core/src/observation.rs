//! Observation encoder - fixed-shape numeric views of the engine state
//!
//! Two layouts are supported, both built from the visible board (hidden rows
//! are never included) and the spawn-orientation grids of the next queue:
//!
//! - [`ObservationMode::Panels`]: a `(20 + 4 * ceil(n / 2)) x 10` grid. Rows
//!   0-19 are the visible board. Each following 4-row panel holds two queue
//!   entries side by side (columns 0-3 and 4-7); columns 8-9 and a missing
//!   second entry are zero padding. With the default queue of 5 this is 32x10.
//! - [`ObservationMode::Flat`]: a `1 x (200 + 16 * n)` vector: the visible
//!   board row-major, then every queue grid row-major, front of the queue first.
//!
//! Queue grids are written as they appear on the board (see
//! [`board_view`]), so a vertical piece is vertical in both layouts.
//! For a given mode and queue capacity the shape never changes.

use serde::{Deserialize, Serialize};

use crate::board::VisibleBoard;
use crate::shapes::{board_view, get_spawn_shape};
use crate::types::{PieceKind, BOARD_WIDTH, SHAPE_SIZE, VISIBLE_HEIGHT};

const WIDTH: usize = BOARD_WIDTH as usize;
const VISIBLE: usize = VISIBLE_HEIGHT as usize;
const SHAPES_PER_PANEL: usize = 2;

/// Observation layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObservationMode {
    /// Board with next-queue panels stacked below it
    #[default]
    Panels,
    /// Single row vector
    Flat,
}

impl ObservationMode {
    /// Parse from `panels` / `flat` (case-insensitive)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "panels" | "panel" | "grid" => Some(ObservationMode::Panels),
            "flat" | "flattened" | "vector" => Some(ObservationMode::Flat),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObservationMode::Panels => "panels",
            ObservationMode::Flat => "flat",
        }
    }

    /// `(rows, cols)` of an observation for a queue of `queue_len` entries
    pub fn dims(&self, queue_len: usize) -> (usize, usize) {
        match self {
            ObservationMode::Panels => {
                let panels = queue_len.div_ceil(SHAPES_PER_PANEL);
                (VISIBLE + SHAPE_SIZE * panels, WIDTH)
            }
            ObservationMode::Flat => (1, VISIBLE * WIDTH + SHAPE_SIZE * SHAPE_SIZE * queue_len),
        }
    }
}

/// Row-major numeric observation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Observation {
    pub mode: ObservationMode,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<u8>,
}

impl Observation {
    fn zeroed(mode: ObservationMode, queue_len: usize) -> Self {
        let (rows, cols) = mode.dims(queue_len);
        Self {
            mode,
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn set(&mut self, row: usize, col: usize, value: u8) {
        self.cells[row * self.cols + col] = value;
    }
}

/// Encode the visible board and the queue into `mode`'s layout
pub fn encode(
    mode: ObservationMode,
    board: &VisibleBoard,
    queue: impl ExactSizeIterator<Item = PieceKind>,
) -> Observation {
    let mut obs = Observation::zeroed(mode, queue.len());
    match mode {
        ObservationMode::Panels => encode_panels(&mut obs, board, queue),
        ObservationMode::Flat => encode_flat(&mut obs, board, queue),
    }
    obs
}

fn encode_panels(
    obs: &mut Observation,
    board: &VisibleBoard,
    queue: impl Iterator<Item = PieceKind>,
) {
    for (y, line) in board.iter().enumerate() {
        obs.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(line);
    }

    for (i, kind) in queue.enumerate() {
        let top = VISIBLE + (i / SHAPES_PER_PANEL) * SHAPE_SIZE;
        let left = (i % SHAPES_PER_PANEL) * SHAPE_SIZE;
        for (dy, line) in board_view(get_spawn_shape(kind)).iter().enumerate() {
            for (dx, &v) in line.iter().enumerate() {
                obs.set(top + dy, left + dx, v);
            }
        }
    }
}

fn encode_flat(obs: &mut Observation, board: &VisibleBoard, queue: impl Iterator<Item = PieceKind>) {
    let mut cursor = 0;
    for &v in board.iter().flatten() {
        obs.cells[cursor] = v;
        cursor += 1;
    }
    for kind in queue {
        for &v in board_view(get_spawn_shape(kind)).iter().flatten() {
            obs.cells[cursor] = v;
            cursor += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_board() -> VisibleBoard {
        [[0; WIDTH]; VISIBLE]
    }

    #[test]
    fn test_dims() {
        assert_eq!(ObservationMode::Panels.dims(5), (32, 10));
        assert_eq!(ObservationMode::Panels.dims(4), (28, 10));
        assert_eq!(ObservationMode::Panels.dims(1), (24, 10));
        assert_eq!(ObservationMode::Flat.dims(5), (1, 280));
    }

    #[test]
    fn test_panels_place_pairs_side_by_side() {
        let mut board = empty_board();
        board[19][0] = 3;
        let queue = [PieceKind::I, PieceKind::O, PieceKind::T];
        let obs = encode(ObservationMode::Panels, &board, queue.into_iter());

        assert_eq!((obs.rows, obs.cols), (28, 10));
        assert_eq!(obs.get(19, 0), Some(3));
        // The spawn I stands in column 1 of the first panel.
        assert!((20..24).all(|r| obs.row(r)[0..4] == [0, 1, 0, 0]));
        // O spawn grid in the right half of the first panel.
        assert_eq!(obs.row(21)[4..8], [0, 7, 7, 0]);
        assert_eq!(obs.row(22)[4..8], [0, 7, 7, 0]);
        // Padding columns stay empty.
        assert!((20..28).all(|r| obs.row(r)[8..] == [0, 0]));
        // T in the second panel, left half; right half is padding.
        assert_eq!(obs.row(24)[0..8], [0, 0, 4, 0, 0, 0, 0, 0]);
        assert_eq!(obs.row(25)[0..8], [0, 4, 4, 0, 0, 0, 0, 0]);
        assert_eq!(obs.row(26)[0..8], [0, 0, 4, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_flat_concatenates_board_then_queue() {
        let mut board = empty_board();
        board[0][0] = 5;
        board[19][9] = 6;
        let queue = [PieceKind::Z, PieceKind::S];
        let obs = encode(ObservationMode::Flat, &board, queue.into_iter());

        assert_eq!(obs.len(), 200 + 32);
        assert_eq!(obs.cells[0], 5);
        assert_eq!(obs.cells[199], 6);
        // Z spawn stands upright: rows [0,2,0,0], [0,2,2,0], [0,0,2,0].
        assert_eq!(obs.cells[200..212], [0, 2, 0, 0, 0, 2, 2, 0, 0, 0, 2, 0]);
        // S is its mirror; row 2 is [0, 3, 0, 0].
        assert_eq!(obs.cells[216 + 8..216 + 12], [0, 3, 0, 0]);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(ObservationMode::from_str("FLAT"), Some(ObservationMode::Flat));
        assert_eq!(ObservationMode::from_str("panels"), Some(ObservationMode::Panels));
        assert_eq!(ObservationMode::from_str("cube"), None);
        assert_eq!(ObservationMode::default(), ObservationMode::Panels);
    }
}
