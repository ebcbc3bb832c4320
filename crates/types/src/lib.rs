//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, terminal view, scripted agents).
//!
//! # Board Dimensions
//!
//! The playfield is 10 columns by 22 rows. The top two rows are hidden overflow
//! rows that give new pieces room to spawn and rotate; only the bottom 20 rows
//! are ever shown to a player or an agent.
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 22 rows (indexed 0-21, rows 0-1 hidden)
//! - **Spawn position**: (3, 0) in overflow-row coordinates
//!
//! # Action Codes
//!
//! | Code | Action |
//! |------|--------|
//! | 0 | noop |
//! | 1 | move left |
//! | 2 | move right |
//! | 3 | move down |
//! | 4 | hard drop |
//! | 5 | rotate counter-clockwise |
//! | 6 | rotate clockwise |
//! | 7 | hold |
//!
//! # Examples
//!
//! ```
//! use tetris_env_types::{Action, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, VISIBLE_HEIGHT};
//!
//! assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
//! assert_eq!(PieceKind::I.color(), 1);
//!
//! assert_eq!(Action::from_code(4), Some(Action::HardDrop));
//! assert_eq!(Action::from_code(42), None);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 22);
//! assert_eq!(VISIBLE_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells, overflow rows included (22 rows)
pub const BOARD_HEIGHT: u8 = 22;

/// Rows above the visible area used for spawn/rotation headroom
pub const HIDDEN_ROWS: u8 = 2;

/// Rows visible to players and agents (20 rows)
pub const VISIBLE_HEIGHT: u8 = BOARD_HEIGHT - HIDDEN_ROWS;

/// Side length of every orientation grid (4x4)
pub const SHAPE_SIZE: usize = 4;

/// Number of filled cells in every orientation grid
pub const MINOS_PER_PIECE: usize = 4;

/// Top-left corner of the orientation grid for a freshly spawned piece (x, y)
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Default length of the next-piece lookahead queue
pub const DEFAULT_NEXT_QUEUE_SIZE: usize = 5;

/// Default episode horizon in counted steps
pub const DEFAULT_HORIZON: u32 = 5000;

/// Score added for every row a piece is moved down by the player
pub const DOWN_STEP_SCORE: u32 = 1;

/// Default interval of the front-end auto-down timer (1 row per second)
pub const DEFAULT_DROP_INTERVAL_MS: u32 = 1000;

/// Front-end frame interval (~30 FPS)
pub const FRAME_MS: u32 = 33;

/// Number of distinct action codes (0..=7)
pub const ACTION_COUNT: usize = 8;

/// Largest value a board or observation cell can hold
pub const MAX_CELL_VALUE: u8 = 7;

/// Line clear scoring table
///
/// Points for clearing N lines with a single lock:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// A cell on the game board
///
/// `0` is empty, `1..=7` is the color id of the piece kind locked there.
pub type Cell = u8;

/// Value of an empty cell
pub const EMPTY: Cell = 0;

/// The seven tetromino piece kinds
///
/// Discriminants are the stable piece indices (0-6). The color id written into
/// the board when a piece locks is `index + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    /// Line of four
    I = 0,
    /// Skew piece, upper half on the left
    Z = 1,
    /// Skew piece, upper half on the right
    S = 2,
    T = 3,
    L = 4,
    J = 5,
    /// Square
    O = 6,
}

impl PieceKind {
    /// All kinds in index order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
    ];

    /// Look up a kind by its index (0-6)
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Look up a kind by the color id it leaves on the board (1-7)
    ///
    /// ```
    /// use tetris_env_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_color(7), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_color(0), None);
    /// ```
    pub fn from_color(color: u8) -> Option<Self> {
        color.checked_sub(1).and_then(Self::from_index)
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Color id written into locked cells (1-7)
    pub fn color(self) -> u8 {
        self as u8 + 1
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use tetris_env_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "o" => Some(PieceKind::O),
            _ => None,
        }
    }

    /// Uppercase single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::Z => "Z",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::O => "O",
        }
    }
}

/// Player actions, one per engine step
///
/// Discriminants are the stable action codes shared with scripted agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Do nothing (not counted toward the horizon)
    Noop = 0,
    /// Move piece one cell left
    MoveLeft = 1,
    /// Move piece one cell right
    MoveRight = 2,
    /// Move piece one cell down, locking it if blocked
    MoveDown = 3,
    /// Drop piece to the lowest legal row and lock it
    HardDrop = 4,
    /// Rotate counter-clockwise
    RotateCcw = 5,
    /// Rotate clockwise
    RotateCw = 6,
    /// Swap with the hold slot (once per lock)
    Hold = 7,
}

impl Action {
    /// All actions in code order
    pub const ALL: [Action; ACTION_COUNT] = [
        Action::Noop,
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveDown,
        Action::HardDrop,
        Action::RotateCcw,
        Action::RotateCw,
        Action::Hold,
    ];

    /// Map a raw action code to an action
    ///
    /// Codes outside `0..=7` (including negative ones) return `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Parse action from its camelCase name
    ///
    /// ```
    /// use tetris_env_types::Action;
    ///
    /// assert_eq!(Action::from_str("hardDrop"), Some(Action::HardDrop));
    /// assert_eq!(Action::from_str("ROTATECW"), Some(Action::RotateCw));
    /// assert_eq!(Action::from_str("pause"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "noop" => Some(Action::Noop),
            "moveleft" => Some(Action::MoveLeft),
            "moveright" => Some(Action::MoveRight),
            "movedown" => Some(Action::MoveDown),
            "harddrop" => Some(Action::HardDrop),
            "rotateccw" => Some(Action::RotateCcw),
            "rotatecw" => Some(Action::RotateCw),
            "hold" => Some(Action::Hold),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Noop => "noop",
            Action::MoveLeft => "moveLeft",
            Action::MoveRight => "moveRight",
            Action::MoveDown => "moveDown",
            Action::HardDrop => "hardDrop",
            Action::RotateCcw => "rotateCcw",
            Action::RotateCw => "rotateCw",
            Action::Hold => "hold",
        }
    }
}

/// One-cell translation directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Left,
    Right,
}

impl Direction {
    /// (dx, dy) offset of a one-cell move
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Rotation directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_dimensions() {
        assert_eq!(BOARD_WIDTH, 10);
        assert_eq!(BOARD_HEIGHT, 22);
        assert_eq!(HIDDEN_ROWS, 2);
        assert_eq!(VISIBLE_HEIGHT, 20);
        assert_eq!(SHAPE_SIZE, 4);
    }

    #[test]
    fn action_codes_are_stable() {
        for (code, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.code() as usize, code);
            assert_eq!(Action::from_code(code as i64), Some(*action));
            assert_eq!(Action::from_str(action.as_str()), Some(*action));
        }
        assert_eq!(Action::from_code(-1), None);
        assert_eq!(Action::from_code(8), None);
    }

    #[test]
    fn piece_colors_cover_one_to_seven() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index() as usize, i);
            assert_eq!(kind.color() as usize, i + 1);
            assert_eq!(PieceKind::from_color(kind.color()), Some(*kind));
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(*kind));
        }
        assert_eq!(PieceKind::from_color(8), None);
        assert_eq!(PieceKind::from_index(7), None);
    }

    #[test]
    fn line_scores_table() {
        assert_eq!(LINE_SCORES, [0, 40, 100, 300, 1200]);
    }

    #[test]
    fn direction_offsets() {
        assert_eq!(Direction::Down.offset(), (0, 1));
        assert_eq!(Direction::Left.offset(), (-1, 0));
        assert_eq!(Direction::Right.offset(), (1, 0));
    }
}
