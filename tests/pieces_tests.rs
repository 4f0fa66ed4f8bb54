//! Shape and rotation tests - matrix turns and the sideways kick

use blockfall::core::{rotate, spawn_x, template, try_rotate, Board, Piece};
use blockfall::types::{RotationDir, ShapeKind};

/// Occupied cells of a shape, shape-local
fn cells_of(kind: ShapeKind, dir: RotationDir, turns: usize) -> Vec<(i8, i8)> {
    let mut shape = *template(kind);
    for _ in 0..turns {
        shape = rotate(&shape, dir);
    }
    shape.occupied().map(|(x, y, _)| (x, y)).collect()
}

/// Vertical I with its bar on board column `col`
fn vertical_i(col: i8) -> Piece {
    let mut piece = Piece::spawn(ShapeKind::I);
    piece.shape = piece.shape.rotated(RotationDir::Cw);
    // Clockwise turn puts the bar in shape column 2
    piece.x = col - 2;
    piece.y = 5;
    piece
}

// ============== Shape Tests ==============

#[test]
fn test_i_rotations() {
    assert_eq!(
        cells_of(ShapeKind::I, RotationDir::Cw, 0),
        [(0, 1), (1, 1), (2, 1), (3, 1)]
    );
    assert_eq!(
        cells_of(ShapeKind::I, RotationDir::Cw, 1),
        [(2, 0), (2, 1), (2, 2), (2, 3)]
    );
    assert_eq!(
        cells_of(ShapeKind::I, RotationDir::Cw, 2),
        [(0, 2), (1, 2), (2, 2), (3, 2)]
    );
    assert_eq!(
        cells_of(ShapeKind::I, RotationDir::Ccw, 1),
        [(1, 0), (1, 1), (1, 2), (1, 3)]
    );
}

#[test]
fn test_o_is_rotation_invariant() {
    let base = cells_of(ShapeKind::O, RotationDir::Cw, 0);
    for turns in 1..4 {
        assert_eq!(cells_of(ShapeKind::O, RotationDir::Cw, turns), base);
        assert_eq!(cells_of(ShapeKind::O, RotationDir::Ccw, turns), base);
    }
}

#[test]
fn test_four_turns_restore_every_shape() {
    for kind in ShapeKind::ALL {
        for dir in [RotationDir::Cw, RotationDir::Ccw] {
            let mut shape = *template(kind);
            for _ in 0..4 {
                shape = rotate(&shape, dir);
            }
            assert_eq!(shape, *template(kind), "{:?} {:?}", kind, dir);
        }
    }
}

#[test]
fn test_opposite_turns_cancel() {
    for kind in ShapeKind::ALL {
        let shape = *template(kind);
        let back = rotate(&rotate(&shape, RotationDir::Cw), RotationDir::Ccw);
        assert_eq!(back, shape, "{:?}", kind);
    }
}

#[test]
fn test_rotation_keeps_cell_values() {
    for kind in ShapeKind::ALL {
        let turned = rotate(template(kind), RotationDir::Cw);
        let values: Vec<u8> = turned.occupied().map(|(_, _, v)| v).collect();
        assert_eq!(values, vec![kind.cell_value(); 4]);
    }
}

#[test]
fn test_spawn_is_centered() {
    for kind in ShapeKind::ALL {
        let shape = template(kind);
        assert_eq!(spawn_x(shape), 5 - (shape.width() / 2) as i8);
        let piece = Piece::spawn(kind);
        assert_eq!(piece.x, spawn_x(shape));
        assert_eq!(piece.y, 0);
    }
}

// ============== Kick Tests ==============

#[test]
fn test_rotate_in_place_when_free() {
    let board = Board::new();
    let mut piece = vertical_i(5);
    let x = piece.x;
    assert!(try_rotate(&board, &mut piece, RotationDir::Cw));
    assert_eq!(piece.x, x);
}

#[test]
fn test_kick_left_off_right_wall() {
    let board = Board::new();
    // Bar on column 9; flat result spans x..x+3 so needs x <= 6
    let mut piece = vertical_i(9);
    assert_eq!(piece.x, 7);
    assert!(try_rotate(&board, &mut piece, RotationDir::Cw));
    assert_eq!(piece.x, 6);
    assert!(!board.collides(&piece));
}

#[test]
fn test_kick_right_off_left_wall() {
    let board = Board::new();
    let mut piece = vertical_i(1);
    assert_eq!(piece.x, -1);
    assert!(try_rotate(&board, &mut piece, RotationDir::Cw));
    assert_eq!(piece.x, 0);
}

#[test]
fn test_right_kick_is_tried_before_left() {
    // T in the middle, blocked in place but free one column either side
    let mut board = Board::new();
    let mut piece = Piece::spawn(ShapeKind::T);
    piece.y = 5;
    // Bottom cell of the clockwise T
    board.set(piece.x + 1, piece.y + 2, 1);
    let rotated = Piece {
        shape: piece.shape.rotated(RotationDir::Cw),
        ..piece
    };
    assert!(board.collides(&rotated));
    assert!(!board.collides(&rotated.shifted(1, 0)));
    assert!(!board.collides(&rotated.shifted(-1, 0)));

    let x = piece.x;
    assert!(try_rotate(&board, &mut piece, RotationDir::Cw));
    assert_eq!(piece.x, x + 1);
}

#[test]
fn test_rotation_reverts_when_every_kick_collides() {
    let board = Board::new();
    // Bar on column 0: flat result needs x >= 0, but kicks only reach x - 1..x + 1
    let mut piece = vertical_i(0);
    let before = piece;
    assert!(!try_rotate(&board, &mut piece, RotationDir::Cw));
    assert_eq!(piece, before);
}
