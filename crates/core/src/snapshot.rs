use std::fmt;

use crate::board::VisibleBoard;
use crate::piece::{Piece, Position};
use crate::shapes::{board_view, get_spawn_shape, ShapeGrid};
use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub position: Position,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            position: value.position(),
        }
    }
}

/// Read-only projection of the engine for visualization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Visible rows with the active piece overlaid
    pub board: VisibleBoard,
    pub active: Option<ActiveSnapshot>,
    /// Next queue, front (next to spawn) first
    pub next_queue: Vec<PieceKind>,
    pub hold: Option<PieceKind>,
    pub can_hold: bool,
    pub started: bool,
    pub game_over: bool,
    pub score: u32,
    pub lines: u32,
    pub steps: u32,
    pub episode_id: u32,
}

impl GameSnapshot {
    /// Spawn-orientation grids of the next queue, front first
    pub fn next_shapes(&self) -> impl Iterator<Item = &'static ShapeGrid> + '_ {
        self.next_queue.iter().map(|&kind| get_spawn_shape(kind))
    }

    pub fn playable(&self) -> bool {
        self.started && !self.game_over
    }
}

fn cell_char(v: u8) -> char {
    match v {
        0 => '.',
        v => char::from(b'0' + v),
    }
}

/// Human-readable dump: board, next queue grids side by side, score
impl fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Main board:")?;
        for line in self.board.iter() {
            let row: String = line.iter().map(|&v| cell_char(v)).collect();
            writeln!(f, "{}", row)?;
        }

        writeln!(f, "Next queue:")?;
        let names: Vec<&str> = self.next_queue.iter().map(|k| k.as_str()).collect();
        writeln!(f, "{}", names.join(" "))?;
        let shapes: Vec<ShapeGrid> = self.next_shapes().map(board_view).collect();
        for r in 0..crate::types::SHAPE_SIZE {
            let row: Vec<String> = shapes
                .iter()
                .map(|grid| grid[r].iter().map(|&v| cell_char(v)).collect())
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }

        if let Some(hold) = self.hold {
            writeln!(f, "Hold: {}", hold.as_str())?;
        }
        writeln!(f, "Score:")?;
        write!(f, "{}", self.score)?;
        if self.game_over {
            write!(f, "\nGAME OVER")?;
        }
        Ok(())
    }
}
