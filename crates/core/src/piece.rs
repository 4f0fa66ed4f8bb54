//! Piece module - the active tetromino and its rotation policy
//!
//! A [`Piece`] owns its own copy of a shape matrix plus a board offset. Rotation
//! uses a simple kick: try the rotated shape in place, then one column right,
//! then one column left of the original position.

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::shapes::{template, Shape};
use crate::types::{CellValue, RotationDir, ShapeKind, BOARD_WIDTH};

/// Column offsets tried after a rotation, relative to the pre-rotation column
pub const KICK_OFFSETS: [i8; 3] = [0, 1, -1];

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of `kind` at its spawn position (centered, row 0)
    pub fn spawn(kind: ShapeKind) -> Self {
        let shape = *template(kind);
        Self {
            kind,
            shape,
            x: spawn_x(&shape),
            y: 0,
        }
    }

    /// Occupied cells in board coordinates as `(x, y, value)`
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, CellValue)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy, v)| (self.x + dx, self.y + dy, v))
    }

    /// Copy of this piece moved by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Spawn column: board center minus half the shape width
pub fn spawn_x(shape: &Shape) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8
}

/// Pick a uniformly random kind and spawn it
pub fn random_piece(rng: &mut SimpleRng) -> Piece {
    Piece::spawn(rng.next_kind())
}

/// Rotate the piece in place, kicking sideways if needed
///
/// Returns false (piece untouched) when the rotated shape collides at every
/// kick offset.
pub fn try_rotate(board: &Board, piece: &mut Piece, dir: RotationDir) -> bool {
    let rotated = Piece {
        shape: piece.shape.rotated(dir),
        ..*piece
    };

    for dx in KICK_OFFSETS {
        let candidate = rotated.shifted(dx, 0);
        if !board.collides(&candidate) {
            *piece = candidate;
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_positions() {
        // 10 / 2 - 4 / 2 = 3
        assert_eq!(Piece::spawn(ShapeKind::I).x, 3);
        // 10 / 2 - 2 / 2 = 4
        assert_eq!(Piece::spawn(ShapeKind::O).x, 4);
        // 10 / 2 - 3 / 2 = 4
        assert_eq!(Piece::spawn(ShapeKind::T).x, 4);
        assert_eq!(Piece::spawn(ShapeKind::T).y, 0);
    }

    #[test]
    fn test_spawn_copies_template() {
        let mut piece = Piece::spawn(ShapeKind::J);
        piece.shape = piece.shape.rotated(RotationDir::Cw);
        assert_ne!(piece.shape, *template(ShapeKind::J));
        assert_eq!(Piece::spawn(ShapeKind::J).shape, *template(ShapeKind::J));
    }

    #[test]
    fn test_cells_apply_offset() {
        let mut piece = Piece::spawn(ShapeKind::O);
        piece.x = 2;
        piece.y = 5;
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(2, 5, 4), (3, 5, 4), (2, 6, 4), (3, 6, 4)]);
    }

    #[test]
    fn test_random_piece_is_deterministic_per_seed() {
        let mut a = SimpleRng::new(5);
        let mut b = SimpleRng::new(5);
        for _ in 0..20 {
            assert_eq!(random_piece(&mut a), random_piece(&mut b));
        }
    }

    #[test]
    fn test_rotate_in_open_space_keeps_column() {
        let board = Board::new();
        let mut piece = Piece::spawn(ShapeKind::T);
        piece.y = 5;
        assert!(try_rotate(&board, &mut piece, RotationDir::Cw));
        assert_eq!(piece.x, 4);
        assert_eq!(piece.shape, template(ShapeKind::T).rotated(RotationDir::Cw));
    }
}
