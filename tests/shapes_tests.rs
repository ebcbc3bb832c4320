//! Shape table tests - geometry and rotation order for every piece kind

use tetris_env::core::shapes::{
    filled_count, get_shape, minos, orientation_count, orientations, rotate_ccw, rotate_cw,
};
use tetris_env::core::Piece;
use tetris_env::types::{PieceKind, Spin};

#[test]
fn test_every_orientation_has_four_cells() {
    for kind in PieceKind::ALL {
        for (rotation, grid) in orientations(kind).iter().enumerate() {
            assert_eq!(filled_count(grid), 4, "{:?} rotation {}", kind, rotation);
        }
    }
}

#[test]
fn test_orientation_counts() {
    assert_eq!(orientation_count(PieceKind::I), 2);
    assert_eq!(orientation_count(PieceKind::Z), 2);
    assert_eq!(orientation_count(PieceKind::S), 2);
    assert_eq!(orientation_count(PieceKind::T), 4);
    assert_eq!(orientation_count(PieceKind::L), 4);
    assert_eq!(orientation_count(PieceKind::J), 4);
    assert_eq!(orientation_count(PieceKind::O), 1);
}

#[test]
fn test_cells_carry_the_kind_color() {
    for kind in PieceKind::ALL {
        for grid in orientations(kind) {
            assert!(minos(grid).all(|(_, _, color)| color == kind.color()));
        }
    }
}

#[test]
fn test_cw_and_ccw_are_inverses() {
    for kind in PieceKind::ALL {
        for rotation in 0..orientation_count(kind) {
            assert_eq!(rotate_ccw(kind, rotate_cw(kind, rotation)), rotation);
            assert_eq!(rotate_cw(kind, rotate_ccw(kind, rotation)), rotation);
        }
    }
}

#[test]
fn test_full_turn_returns_to_start() {
    for kind in PieceKind::ALL {
        let mut rotation = 0;
        for _ in 0..orientation_count(kind) {
            rotation = rotate_cw(kind, rotation);
        }
        assert_eq!(rotation, 0, "{:?}", kind);
    }
}

#[test]
fn test_piece_rotation_proposals() {
    let piece = Piece::new(PieceKind::T);
    let cw = piece.propose_rotate(Spin::Clockwise);
    let ccw = piece.propose_rotate(Spin::CounterClockwise);
    assert_eq!(cw.rotation, 1);
    assert_eq!(ccw.rotation, 3);
    assert_eq!(cw.shape, get_shape(PieceKind::T, 1));
    assert_eq!(cw.position, piece.position());
    // Proposals never change the piece itself.
    assert_eq!(piece.rotation(), 0);
}
