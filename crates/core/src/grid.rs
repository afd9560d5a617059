//! Grid module - the settled-block matrix
//!
//! The grid is a `rows x columns` matrix of [`Cell`] values stored row-major in a
//! single flat buffer. Dimensions are fixed at construction.
//! Coordinates: `(row, col)` where row 0 is the top and `rows - 1` the bottom.

use crate::types::{Cell, EMPTY};

/// The settled blocks of a board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    /// Flat array of cells, row-major order (row * columns + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![EMPTY; rows * columns],
        }
    }

    /// Build a grid from explicit rows (all rows must have equal length)
    ///
    /// Returns `None` for ragged or empty input.
    pub fn from_rows(rows: &[&[Cell]]) -> Option<Self> {
        let columns = rows.first()?.len();
        if columns == 0 || rows.iter().any(|r| r.len() != columns) {
            return None;
        }
        let cells = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Some(Self {
            rows: rows.len(),
            columns,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        Some(row * self.columns + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get cell at `(row, col)`, `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at `(row, col)`
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Within bounds and filled
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(c) if c != EMPTY)
    }

    /// Borrow one row
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`. Use [`get`](Self::get) for checked
    /// access.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Check if a row has no empty cell
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        self.row(row).iter().all(|&c| c != EMPTY)
    }

    /// Remove every full row and insert empty rows at the top.
    ///
    /// Rows above a cleared row shift down by one per cleared row below them.
    /// Returns the number of rows cleared.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.columns;
        let mut write_row = self.rows;
        let mut cleared = 0;

        // Scan bottom to top, compacting kept rows downwards.
        for read_row in (0..self.rows).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                self.cells.copy_within(src..src + width, write_row * width);
            }
        }

        self.cells[..write_row * width].fill(EMPTY);
        cleared
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == EMPTY)
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
