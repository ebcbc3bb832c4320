//! Piece module - the active, player-controlled tetromino
//!
//! A piece only proposes candidates. The engine validates a candidate against
//! the board and then commits it; the piece itself never checks the board.

use crate::shapes::{get_shape, rotate_ccw, rotate_cw, ShapeGrid};
use crate::types::{Direction, PieceKind, Spin, SPAWN_POSITION};

/// Board coordinate of an orientation grid's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column
    pub x: i8,
    /// Row (0 is the topmost hidden row)
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub const fn spawn() -> Self {
        Self::new(SPAWN_POSITION.0, SPAWN_POSITION.1)
    }

    /// Position shifted by (dx, dy)
    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// A proposed transform of the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub shape: &'static ShapeGrid,
    pub position: Position,
    pub rotation: usize,
}

impl Candidate {
    /// Same rotation, shifted by (dx, dy)
    pub fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            position: self.position.offset(dx, dy),
            ..self
        }
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    rotation: usize,
    position: Position,
}

impl Piece {
    /// Create a new piece at spawn position and orientation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            position: Position::spawn(),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Grid for the current rotation
    pub fn shape(&self) -> &'static ShapeGrid {
        get_shape(self.kind, self.rotation)
    }

    /// Current grid and position
    pub fn current(&self) -> (&'static ShapeGrid, Position) {
        (self.shape(), self.position)
    }

    /// Candidate translated one cell in `direction`
    pub fn propose_move(&self, direction: Direction) -> Candidate {
        let (dx, dy) = direction.offset();
        Candidate {
            shape: self.shape(),
            position: self.position.offset(dx, dy),
            rotation: self.rotation,
        }
    }

    /// Candidate rotated in place
    pub fn propose_rotate(&self, spin: Spin) -> Candidate {
        let rotation = match spin {
            Spin::Clockwise => rotate_cw(self.kind, self.rotation),
            Spin::CounterClockwise => rotate_ccw(self.kind, self.rotation),
        };
        Candidate {
            shape: get_shape(self.kind, rotation),
            position: self.position,
            rotation,
        }
    }

    /// Apply a transform that the caller already validated
    pub fn commit(&mut self, position: Position, rotation: usize) {
        self.position = position;
        self.rotation = rotation;
    }

    /// Apply a validated candidate
    pub fn commit_candidate(&mut self, candidate: &Candidate) {
        self.commit(candidate.position, candidate.rotation);
    }

    /// Back to rotation 0 at the spawn position
    pub fn reset_to_spawn(&mut self) {
        self.rotation = 0;
        self.position = Position::spawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_piece_starts_at_spawn() {
        let piece = Piece::new(PieceKind::T);
        assert_eq!(piece.rotation(), 0);
        assert_eq!(piece.position(), Position::new(3, 0));
    }

    #[test]
    fn proposals_do_not_mutate() {
        let piece = Piece::new(PieceKind::L);
        let down = piece.propose_move(Direction::Down);
        let left = piece.propose_move(Direction::Left);
        let cw = piece.propose_rotate(Spin::Clockwise);

        assert_eq!(down.position, Position::new(3, 1));
        assert_eq!(left.position, Position::new(2, 0));
        assert_eq!(cw.position, piece.position());
        assert_eq!(cw.rotation, 1);
        assert_eq!(piece, Piece::new(PieceKind::L));
    }

    #[test]
    fn commit_then_reset() {
        let mut piece = Piece::new(PieceKind::J);
        let c = piece.propose_rotate(Spin::CounterClockwise).shifted(2, 5);
        piece.commit_candidate(&c);
        assert_eq!(piece.rotation(), 3);
        assert_eq!(piece.position(), Position::new(5, 5));

        piece.reset_to_spawn();
        assert_eq!(piece, Piece::new(PieceKind::J));
    }

    #[test]
    fn square_rotation_is_identity() {
        let piece = Piece::new(PieceKind::O);
        let c = piece.propose_rotate(Spin::Clockwise);
        assert_eq!(c.rotation, 0);
        assert_eq!(c.shape, piece.shape());
    }
}
