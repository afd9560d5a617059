//! Pieces module - tetromino shape matrices and rotation
//!
//! A shape is a small matrix of cells (`0` transparent, `>0` color index).
//! Rotation produces a new matrix with width and height swapped; there are no
//! wall kicks, a rotation either fits at the current origin or is rejected.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, EMPTY};

/// Largest edge of any shape matrix
pub const MAX_SHAPE_EDGE: usize = 4;

/// One occupied cell of a shape: `(row, col, color)` relative to the top-left
pub type Mino = (usize, usize, Cell);

/// Occupied cells of a shape, stack-only
pub type Minos = ArrayVec<Mino, { MAX_SHAPE_EDGE * MAX_SHAPE_EDGE }>;

/// Immutable shape matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceShape {
    width: u8,
    height: u8,
    cells: [[Cell; MAX_SHAPE_EDGE]; MAX_SHAPE_EDGE],
}

impl PieceShape {
    /// Build a shape from rows of equal length (at most 4x4)
    ///
    /// Returns `None` for empty, ragged or oversized input.
    pub fn from_rows(rows: &[&[Cell]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || width > MAX_SHAPE_EDGE || height > MAX_SHAPE_EDGE {
            return None;
        }
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }

        let mut cells = [[EMPTY; MAX_SHAPE_EDGE]; MAX_SHAPE_EDGE];
        for (i, row) in rows.iter().enumerate() {
            cells[i][..width].copy_from_slice(row);
        }
        Some(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    /// Canonical spawn-orientation shape for a kind
    pub fn of(kind: PieceKind) -> Self {
        let rows: &[&[Cell]] = match kind {
            PieceKind::L => &[&[2, 2, 2], &[2, 0, 0]],
            PieceKind::J => &[&[6, 6, 6], &[0, 0, 6]],
            PieceKind::T => &[&[3, 3, 3], &[0, 3, 0]],
            PieceKind::I => &[&[4, 4, 4, 4]],
            PieceKind::Z => &[&[7, 7, 0], &[0, 7, 7]],
            PieceKind::S => &[&[0, 1, 1], &[1, 1, 0]],
            PieceKind::O => &[&[5, 5], &[5, 5]],
        };
        // The table above is fixed and always within bounds.
        match Self::from_rows(rows) {
            Some(shape) => shape,
            None => unreachable!("canonical shape table is well-formed"),
        }
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Cell at `(row, col)`, `None` outside the matrix
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        Some(self.cells[row][col])
    }

    /// Quarter turn.
    ///
    /// `new[i][j] = old[j][old_width - 1 - i]`: the last column of the old
    /// matrix becomes the first row of the new one.
    pub fn rotated(&self) -> Self {
        let old_w = self.width();
        let old_h = self.height();
        let mut cells = [[EMPTY; MAX_SHAPE_EDGE]; MAX_SHAPE_EDGE];
        for (i, row) in cells.iter_mut().enumerate().take(old_w) {
            for (j, cell) in row.iter_mut().enumerate().take(old_h) {
                *cell = self.cells[j][old_w - 1 - i];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// Apply `turns` quarter turns
    pub fn rotated_by(&self, turns: u8) -> Self {
        (0..turns % 4).fold(*self, |shape, _| shape.rotated())
    }

    /// Occupied cells, top-to-bottom then left-to-right
    pub fn minos(&self) -> Minos {
        let mut out = Minos::new();
        for i in 0..self.height() {
            for j in 0..self.width() {
                let c = self.cells[i][j];
                if c != EMPTY {
                    out.push((i, j, c));
                }
            }
        }
        out
    }

    /// Rows of the matrix as slices (for rendering/inspection)
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells[..self.height()]
            .iter()
            .map(move |r| &r[..self.width()])
    }
}
