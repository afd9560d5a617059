use crate::engine::FallingPiece;
use crate::types::{Cell, EMPTY};

/// Owned, read-only copy of the engine state for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BoardSnapshot {
    pub rows: usize,
    pub columns: usize,
    /// Settled cells only, row-major
    pub cells: Vec<Cell>,
    pub falling: Option<FallingPiece>,
    pub paused: bool,
}

impl BoardSnapshot {
    pub fn clear(&mut self) {
        self.rows = 0;
        self.columns = 0;
        self.cells.clear();
        self.falling = None;
        self.paused = false;
    }

    /// Settled grid cell, ignoring the falling piece
    pub fn settled_at(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows || col >= self.columns {
            return EMPTY;
        }
        self.cells[row * self.columns + col]
    }

    /// What a renderer should paint at `(row, col)`: the falling piece wins over
    /// settled content.
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        if let Some(piece) = self.falling {
            if row >= piece.y && col >= piece.x {
                if let Some(c) = piece.shape.get(row - piece.y, col - piece.x) {
                    if c != EMPTY {
                        return c;
                    }
                }
            }
        }
        self.settled_at(row, col)
    }
}
