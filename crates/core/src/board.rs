//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of cell values (0 = empty, 1..=7 = shape identity).
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! Pieces may hang above the visible board (negative y). Those cells only
//! collide with the side walls and are dropped when a piece is merged.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{CellValue, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Row indices removed by one [`Board::clear_full_rows`] call, bottom to top
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [CellValue; BOARD_SIZE],
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
    pub fn get(&self, x: i8, y: i8) -> Option<CellValue> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, value: CellValue) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(v) if v != EMPTY)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|&v| v != EMPTY)
    }

    /// Cells of row `y` (panics if `y >= BOARD_HEIGHT`)
    pub fn row(&self, y: usize) -> &[CellValue] {
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> + '_ {
        self.cells.chunks_exact(WIDTH)
    }

    /// Whether the piece, at its current offset, hits a wall, the floor, or a filled cell
    ///
    /// Cells above the top edge (y < 0) only collide with the side walls.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.cells().any(|(x, y, _)| {
            if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
                return true;
            }
            y >= 0 && self.is_occupied(x, y)
        })
    }

    /// Write the piece's cells into the board
    ///
    /// Cells above the top edge are skipped. Returns how many were skipped.
    pub fn merge(&mut self, piece: &Piece) -> usize {
        let mut lost = 0;
        for (x, y, v) in piece.cells() {
            if !self.set(x, y, v) {
                lost += 1;
            }
        }
        lost
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Remaining rows keep their relative order and settle to the bottom; empty
    /// rows fill in from the top. Uses a two-pointer pass with zero allocation.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let mut write_y = HEIGHT;

        // Scan from bottom to top
        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    // copy_within handles overlapping ranges
                    let src_start = read_y * WIDTH;
                    self.cells
                        .copy_within(src_start..src_start + WIDTH, write_y * WIDTH);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * WIDTH].fill(EMPTY);

        cleared_rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Copy the board into a row-major grid (used by snapshots)
    pub fn write_u8_grid(&self, out: &mut [[CellValue; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Create from a row-major grid
    pub fn from_rows(rows: [[CellValue; WIDTH]; HEIGHT]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            board.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        board
    }

    /// Convert to a row-major grid
    pub fn to_rows(&self) -> [[CellValue; WIDTH]; HEIGHT] {
        let mut out = [[EMPTY; WIDTH]; HEIGHT];
        self.write_u8_grid(&mut out);
        out
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
    use crate::types::ShapeKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_collides_ignores_occupancy_above_top() {
        let mut board = Board::new();
        // Fill the top row entirely
        for x in 0..10 {
            board.set(x, 0, 1);
        }
        // Horizontal I sits in shape row 1, so at y = -1 it lies on board row 0
        let mut piece = Piece::spawn(ShapeKind::I);
        piece.y = -1;
        assert!(board.collides(&piece));

        // At y = -2 every occupied cell is above the board
        piece.y = -2;
        assert!(!board.collides(&piece));
    }

    #[test]
    fn test_merge_reports_lost_cells() {
        let mut board = Board::new();
        let mut piece = Piece::spawn(ShapeKind::O);
        piece.y = -1;
        let lost = board.merge(&piece);
        assert_eq!(lost, 2);
        assert_eq!(board.get(piece.x, 0), Some(4));
        assert_eq!(board.get(piece.x + 1, 0), Some(4));
    }

    #[test]
    fn test_clear_reports_indices_bottom_to_top() {
        let mut rows = [[0u8; 10]; 20];
        rows[19] = [1; 10];
        rows[17] = [2; 10];
        rows[18][0] = 3;
        let mut board = Board::from_rows(rows);

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);

        // Partial row settles to the bottom
        assert_eq!(board.get(0, 19), Some(3));
        assert!(board.row(18).iter().all(|&v| v == EMPTY));
    }

    #[test]
    fn test_rows_roundtrip() {
        let mut rows = [[0u8; 10]; 20];
        rows[5][3] = 4;
        rows[10][7] = 3;
        assert_eq!(Board::from_rows(rows).to_rows(), rows);
    }
}
