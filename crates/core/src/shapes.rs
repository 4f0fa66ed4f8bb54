//! Shapes module - tetromino templates and matrix rotation
//!
//! Each tetromino is stored as a square matrix (2x2, 3x3 or 4x4) in its spawn
//! orientation. Nonzero entries carry the shape's cell value.
//!
//! [`Shape`] is a `Copy` value type: instantiating a template or rotating a
//! shape always yields an independent matrix, so live pieces can never alias
//! the static templates.

use crate::types::{CellValue, RotationDir, ShapeKind, EMPTY};

/// Largest bounding box of any tetromino
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square matrix of cell values, row-major (`cells[y][x]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[CellValue; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from the top-left `N x N` corner of a 4x4 grid
    const fn from_grid(size: u8, cells: [[CellValue; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        Self { size, cells }
    }

    /// Build a shape from a square slice of rows (for tests and tools)
    ///
    /// Returns None if the rows are not square or larger than 4x4.
    pub fn from_rows(rows: &[&[CellValue]]) -> Option<Self> {
        let n = rows.len();
        if n == 0 || n > MAX_SHAPE_SIZE || rows.iter().any(|r| r.len() != n) {
            return None;
        }
        let mut cells = [[EMPTY; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            cells[y][..n].copy_from_slice(row);
        }
        Some(Self {
            size: n as u8,
            cells,
        })
    }

    /// Side length of the bounding box
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Width used for spawn centering (equal to `size` for square shapes)
    pub fn width(&self) -> usize {
        self.size()
    }

    /// Cell at column `x`, row `y` (EMPTY outside the matrix)
    pub fn get(&self, x: usize, y: usize) -> CellValue {
        if x >= self.size() || y >= self.size() {
            return EMPTY;
        }
        self.cells[y][x]
    }

    /// Iterate over occupied cells as `(x, y, value)`, row by row
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8, CellValue)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| {
                let v = self.cells[y][x];
                (v != EMPTY).then_some((x as i8, y as i8, v))
            })
        })
    }

    /// Rows of the matrix, trimmed to `size`
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> + '_ {
        self.cells[..self.size()].iter().map(|row| &row[..self.size()])
    }

    /// Return a quarter-turn rotation of this shape
    ///
    /// Clockwise: `out[x][n-1-y] = in[y][x]`.
    /// Counter-clockwise: `out[n-1-x][y] = in[y][x]`.
    pub fn rotated(&self, dir: RotationDir) -> Shape {
        let n = self.size();
        let mut out = *self;
        for y in 0..n {
            for x in 0..n {
                match dir {
                    RotationDir::Cw => out.cells[x][n - 1 - y] = self.cells[y][x],
                    RotationDir::Ccw => out.cells[n - 1 - x][y] = self.cells[y][x],
                }
            }
        }
        out
    }
}

/// Free-function form of [`Shape::rotated`]
pub fn rotate(shape: &Shape, dir: RotationDir) -> Shape {
    shape.rotated(dir)
}

const I_SHAPE: Shape = Shape::from_grid(
    4,
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const J_SHAPE: Shape = Shape::from_grid(
    3,
    [[2, 0, 0, 0], [2, 2, 2, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const L_SHAPE: Shape = Shape::from_grid(
    3,
    [[0, 0, 3, 0], [3, 3, 3, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const O_SHAPE: Shape = Shape::from_grid(
    2,
    [[4, 4, 0, 0], [4, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const S_SHAPE: Shape = Shape::from_grid(
    3,
    [[0, 5, 5, 0], [5, 5, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const T_SHAPE: Shape = Shape::from_grid(
    3,
    [[0, 6, 0, 0], [6, 6, 6, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const Z_SHAPE: Shape = Shape::from_grid(
    3,
    [[7, 7, 0, 0], [0, 7, 7, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

/// Static template for a kind in spawn orientation
pub fn template(kind: ShapeKind) -> &'static Shape {
    match kind {
        ShapeKind::I => &I_SHAPE,
        ShapeKind::J => &J_SHAPE,
        ShapeKind::L => &L_SHAPE,
        ShapeKind::O => &O_SHAPE,
        ShapeKind::S => &S_SHAPE,
        ShapeKind::T => &T_SHAPE,
        ShapeKind::Z => &Z_SHAPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_sizes() {
        assert_eq!(template(ShapeKind::I).size(), 4);
        assert_eq!(template(ShapeKind::O).size(), 2);
        for kind in [ShapeKind::J, ShapeKind::L, ShapeKind::S, ShapeKind::T, ShapeKind::Z] {
            assert_eq!(template(kind).size(), 3);
        }
    }

    #[test]
    fn templates_have_four_cells_of_their_own_value() {
        for kind in ShapeKind::ALL {
            let cells: Vec<_> = template(kind).occupied().collect();
            assert_eq!(cells.len(), 4, "{:?}", kind);
            assert!(cells.iter().all(|&(_, _, v)| v == kind.cell_value()));
        }
    }

    #[test]
    fn rotate_t_clockwise() {
        let t = template(ShapeKind::T).rotated(RotationDir::Cw);
        let rows: Vec<Vec<u8>> = t.rows().map(|r| r.to_vec()).collect();
        assert_eq!(rows, vec![vec![0, 6, 0], vec![0, 6, 6], vec![0, 6, 0]]);
    }

    #[test]
    fn rotate_t_counter_clockwise() {
        let t = template(ShapeKind::T).rotated(RotationDir::Ccw);
        let rows: Vec<Vec<u8>> = t.rows().map(|r| r.to_vec()).collect();
        assert_eq!(rows, vec![vec![0, 6, 0], vec![6, 6, 0], vec![0, 6, 0]]);
    }

    #[test]
    fn rotation_does_not_touch_template() {
        let before = *template(ShapeKind::L);
        let _ = rotate(template(ShapeKind::L), RotationDir::Cw);
        assert_eq!(*template(ShapeKind::L), before);
    }

    #[test]
    fn from_rows_rejects_non_square() {
        assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
        assert!(Shape::from_rows(&[]).is_none());
        let s = Shape::from_rows(&[&[1, 0], &[1, 1]]).unwrap();
        assert_eq!(s.size(), 2);
        assert_eq!(s.get(1, 1), 1);
        assert_eq!(s.get(2, 0), EMPTY);
    }
}
