//! Board module - manages the game grid
//!
//! The board is a 10x22 grid where each cell is empty (0) or holds the color id
//! (1-7) of a locked piece. Rows 0-1 are hidden overflow rows above the 20
//! visible rows.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..21 (top to bottom)

use arrayvec::ArrayVec;

use crate::piece::{Piece, Position};
use crate::shapes::{minos, ShapeGrid};
use crate::types::{
    Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY, HIDDEN_ROWS, MINOS_PER_PIECE, SHAPE_SIZE,
    VISIBLE_HEIGHT,
};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The visible rows of the board, row-major
pub type VisibleBoard = [[Cell; BOARD_WIDTH as usize]; VISIBLE_HEIGHT as usize];

/// The game board - 10 columns x 22 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a single cell is inside the board and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        self.get(x, y) == Some(EMPTY)
    }

    /// Check if a shape placed at `pos` fits: every filled cell inside the
    /// board and on an empty cell
    pub fn is_valid(&self, shape: &ShapeGrid, pos: Position) -> bool {
        let mut checked = 0;
        for (dx, dy, _) in minos(shape) {
            if !self.is_free(pos.x + dx, pos.y + dy) {
                return false;
            }
            checked += 1;
            if checked == MINOS_PER_PIECE {
                break;
            }
        }
        true
    }

    /// Write a validated placement into the board
    ///
    /// # Panics
    ///
    /// Panics if any filled cell is out of bounds or already occupied. Callers
    /// must check [`Board::is_valid`] first.
    pub fn lock(&mut self, shape: &ShapeGrid, pos: Position) {
        for (dx, dy, color) in minos(shape) {
            let (x, y) = (pos.x + dx, pos.y + dy);
            let idx = Self::index(x, y)
                .unwrap_or_else(|| panic!("lock out of bounds at ({}, {})", x, y));
            assert_eq!(
                self.cells[idx], EMPTY,
                "lock into occupied cell at ({}, {})",
                x, y
            );
            self.cells[idx] = color;
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    /// Clear full rows in the window `[from_row, from_row + 4)` and shift down
    ///
    /// With `k` full rows and `last` the lowest of them, every row `j` from
    /// `last` up to `k` takes the content of row `j - k` and rows `0..k` are
    /// emptied. Rows below `last` are untouched. When the full rows are not
    /// adjacent, a partial row between them is overwritten rather than kept.
    /// Returns the number of full rows found (0-4).
    pub fn clear_lines(&mut self, from_row: i8) -> usize {
        let start = (from_row.max(0) as usize).min(HEIGHT);
        let end = ((from_row as i16 + SHAPE_SIZE as i16).clamp(0, HEIGHT as i16)) as usize;

        let full: ArrayVec<usize, SHAPE_SIZE> =
            (start..end).filter(|&y| self.is_row_full(y)).collect();
        let Some(&last) = full.last() else {
            return 0;
        };
        let k = full.len();

        for y in (k..=last).rev() {
            let src = (y - k) * WIDTH;
            self.cells.copy_within(src..src + WIDTH, y * WIDTH);
        }
        self.cells[..k * WIDTH].fill(EMPTY);

        k
    }

    /// The visible rows with `active` overlaid, without touching the board
    ///
    /// # Panics
    ///
    /// Panics if an active-piece cell overlaps a locked cell, which means a
    /// placement was committed without validation.
    pub fn visible_view(&self, active: Option<&Piece>) -> VisibleBoard {
        let mut view = [[EMPTY; WIDTH]; VISIBLE_HEIGHT as usize];
        for (y, line) in view.iter_mut().enumerate() {
            line.copy_from_slice(self.row(y + HIDDEN_ROWS as usize));
        }

        if let Some(piece) = active {
            let (shape, pos) = piece.current();
            for (dx, dy, color) in minos(shape) {
                let (x, y) = (pos.x + dx, pos.y + dy);
                assert_eq!(
                    self.get(x, y),
                    Some(EMPTY),
                    "active piece conflicts with board at ({}, {})",
                    x,
                    y
                );
                if y >= HIDDEN_ROWS as i8 {
                    view[(y - HIDDEN_ROWS as i8) as usize][x as usize] = color;
                }
            }
        }

        view
    }

    /// A single row as a slice
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Build a board from 22 rows for testing
    #[cfg(test)]
    pub fn from_rows(rows: [[Cell; WIDTH]; HEIGHT]) -> Self {
        let mut board = Self::new();
        for (y, line) in rows.iter().enumerate() {
            board.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(line);
        }
        board
    }

    /// Fill a row with one color, optionally leaving one column empty (for testing)
    #[cfg(test)]
    pub fn fill_row(&mut self, y: usize, color: Cell, hole: Option<usize>) {
        for x in 0..WIDTH {
            let cell = if Some(x) == hole { EMPTY } else { color };
            self.cells[y * WIDTH + x] = cell;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::get_shape;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 21), Some(219));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 22), None);
    }

    #[test]
    fn test_is_valid_checks_only_filled_cells() {
        let board = Board::new();
        // Spawn I is a vertical bar in grid column 1, rows 0..=3.
        let i = get_shape(PieceKind::I, 0);
        assert!(board.is_valid(i, Position::new(3, 0)));
        assert!(!board.is_valid(i, Position::new(3, -1)));
        // Grid column 0 is empty, so x = -1 still fits.
        assert!(board.is_valid(i, Position::new(-1, 5)));
        assert!(!board.is_valid(i, Position::new(-2, 5)));
        assert!(board.is_valid(i, Position::new(8, 5)));
        assert!(!board.is_valid(i, Position::new(9, 5)));
        // The bottom cell reaches board row 21 at y = 18.
        assert!(board.is_valid(i, Position::new(3, 18)));
        assert!(!board.is_valid(i, Position::new(3, 19)));
    }

    #[test]
    fn test_is_valid_rejects_overlap() {
        let mut board = Board::new();
        board.set(4, 10, 7);
        let o = get_shape(PieceKind::O, 0);
        // O occupies grid cols 1..=2, rows 1..=2.
        assert!(!board.is_valid(o, Position::new(3, 9)));
        assert!(board.is_valid(o, Position::new(4, 9)));
    }

    #[test]
    fn test_lock_writes_color() {
        let mut board = Board::new();
        let t = get_shape(PieceKind::T, 0);
        board.lock(t, Position::new(0, 18));
        // Spawn T points left: a bar in column 2 with a nub at column 1.
        assert_eq!(board.get(1, 19), Some(4));
        assert_eq!(board.get(2, 18), Some(4));
        assert_eq!(board.get(2, 19), Some(4));
        assert_eq!(board.get(2, 20), Some(4));
        assert_eq!(board.filled_cells(), 4);
    }

    #[test]
    #[should_panic(expected = "occupied")]
    fn test_lock_into_occupied_cell_panics() {
        let mut board = Board::new();
        board.set(2, 20, 3);
        board.lock(get_shape(PieceKind::T, 0), Position::new(0, 18));
    }

    #[test]
    fn test_clear_lines_none_is_noop() {
        let mut board = Board::new();
        board.fill_row(21, 1, Some(4));
        let before = board.clone();
        assert_eq!(board.clear_lines(18), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_single_line_shifts_rows_above() {
        let mut board = Board::new();
        board.fill_row(21, 2, None);
        board.set(3, 20, 5);
        board.set(7, 19, 6);

        assert_eq!(board.clear_lines(18), 1);
        assert_eq!(board.get(3, 21), Some(5));
        assert_eq!(board.get(7, 20), Some(6));
        assert_eq!(board.filled_cells(), 2);
    }

    #[test]
    fn test_clear_outside_window_is_ignored() {
        let mut board = Board::new();
        board.fill_row(21, 2, None);
        assert_eq!(board.clear_lines(10), 0);
        assert!(board.is_row_full(21));
    }

    #[test]
    fn test_clear_non_contiguous_rows_shifts_by_count() {
        let mut board = Board::new();
        board.fill_row(21, 1, None);
        board.fill_row(20, 3, Some(0));
        board.fill_row(19, 2, None);
        board.set(5, 18, 6);

        assert_eq!(board.clear_lines(18), 2);
        // Every row from 21 up takes the row two above it.
        assert!(board.row(21).iter().all(|&c| c == 2));
        assert_eq!(board.row(20), &[0, 0, 0, 0, 0, 6, 0, 0, 0, 0]);
        assert!(board.row(19).iter().all(|&c| c == EMPTY));
        assert_eq!(board.filled_cells(), 11);
    }

    #[test]
    fn test_clear_near_top_empties_rows_above_count() {
        let mut board = Board::new();
        board.fill_row(0, 5, None);
        board.fill_row(1, 5, None);
        board.set(4, 2, 1);

        assert_eq!(board.clear_lines(0), 2);
        assert_eq!(board.filled_cells(), 1);
        assert_eq!(board.get(4, 2), Some(1));
    }

    #[test]
    fn test_clear_with_negative_window_start() {
        let mut board = Board::new();
        board.fill_row(1, 4, None);
        board.set(0, 0, 2);
        assert_eq!(board.clear_lines(-1), 1);
        assert_eq!(board.get(0, 1), Some(2));
        assert_eq!(board.get(0, 0), Some(EMPTY));
    }

    #[test]
    fn test_visible_view_overlays_without_mutation() {
        let mut board = Board::new();
        board.set(0, 21, 1);
        let piece = Piece::new(PieceKind::O);

        let view = board.visible_view(Some(&piece));
        assert_eq!(view[19][0], 1);
        // O spawns with its cells in rows 1..=2; only row 2 is visible.
        assert_eq!(view[0][4], 7);
        assert_eq!(view[0][5], 7);
        assert_eq!(board.filled_cells(), 1);
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let mut rows = [[EMPTY; WIDTH]; HEIGHT];
        rows[21][0] = 7;
        rows[2][9] = 1;
        let board = Board::from_rows(rows);
        assert_eq!(board.get(0, 21), Some(7));
        assert_eq!(board.get(9, 2), Some(1));
        assert_eq!(board.visible_view(None)[0][9], 1);
    }
}
