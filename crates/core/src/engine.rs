//! Board engine - the whole game state machine
//!
//! [`BoardEngine`] owns the grid, the falling piece and the pause flag. It is
//! driven entirely from outside: a clock calls [`BoardEngine::tick`] on a fixed
//! interval and the input layer calls the command handlers. Every call runs to
//! completion; the engine never sleeps or schedules anything itself.
//!
//! States: Unpaused-NoPiece, Unpaused-Falling, Paused. There is no terminal
//! state: a piece that comes to rest at row 1 or above resets the board.

use log::{debug, info};

use crate::config::{ConfigError, EngineConfig};
use crate::grid::Grid;
use crate::pieces::PieceShape;
use crate::rng::SimpleRng;
use crate::snapshot::BoardSnapshot;
use crate::types::{Cell, Command, TOP_OUT_ROW};

/// Active falling piece
///
/// `x`/`y` are the column/row of the shape matrix's top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallingPiece {
    pub shape: PieceShape,
    pub x: usize,
    pub y: usize,
}

impl FallingPiece {
    /// Place a shape at the top row, horizontally centered
    pub fn spawn(shape: PieceShape, columns: usize) -> Self {
        Self {
            shape,
            x: columns.saturating_sub(shape.width()) / 2,
            y: 0,
        }
    }

    /// Absolute `(row, col, color)` of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.shape
            .minos()
            .into_iter()
            .map(move |(i, j, c)| (self.y + i, self.x + j, c))
    }

    /// Row just below the shape's bottom edge
    pub fn bottom(&self) -> usize {
        self.y + self.shape.height()
    }
}

/// What happened when a piece was fixed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOutcome {
    /// Merged into the grid; `lines_cleared` full rows were removed
    Settled { lines_cleared: usize },
    /// Came to rest too high; the board was reset and the piece discarded
    ToppedOut,
}

/// The board simulation engine
#[derive(Debug, Clone)]
pub struct BoardEngine {
    config: EngineConfig,
    grid: Grid,
    falling: Option<FallingPiece>,
    paused: bool,
    rng: SimpleRng,
    seed: u32,
}

impl BoardEngine {
    /// Engine with the default 20x11 board
    pub fn new(seed: u32) -> Self {
        let config = EngineConfig::default();
        Self {
            grid: Grid::new(config.rows, config.columns),
            config,
            falling: None,
            paused: false,
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Engine with custom geometry/interval
    pub fn with_config(config: EngineConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(config.rows, config.columns),
            config,
            ..Self::new(seed)
        })
    }

    /// Engine starting from a prepared board
    ///
    /// The grid's dimensions become the configured size.
    pub fn with_grid(grid: Grid, seed: u32) -> Result<Self, ConfigError> {
        let config = EngineConfig::default().with_size(grid.rows(), grid.columns());
        config.validate()?;
        Ok(Self {
            grid,
            config,
            ..Self::new(seed)
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn falling(&self) -> Option<&FallingPiece> {
        self.falling.as_ref()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Clear the board, drop the falling piece and unpause.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.falling = None;
        self.paused = false;
    }

    /// Start a new game (same as [`reset`](Self::reset))
    pub fn new_game(&mut self) {
        info!("new game");
        self.reset();
    }

    /// Spawn a random kind in a random orientation.
    ///
    /// No collision check: an overlap is only noticed when the piece rests.
    fn spawn_piece(&mut self) {
        let kind = self.rng.pick_kind();
        let turns = self.rng.pick_turns();
        debug!("spawn {} turned {}x", kind.as_str(), turns);
        self.spawn_shape(PieceShape::of(kind).rotated_by(turns));
    }

    /// Make `shape` the falling piece at the spawn position, replacing any
    /// piece already falling.
    pub fn spawn_shape(&mut self, shape: PieceShape) {
        self.falling = Some(FallingPiece::spawn(shape, self.grid.columns()));
    }

    /// Whether `shape` placed at `(x, y)` leaves the board or overlaps settled
    /// cells.
    pub fn collides(&self, shape: &PieceShape, x: usize, y: usize) -> bool {
        if x + shape.width() > self.grid.columns() || y + shape.height() > self.grid.rows() {
            return true;
        }
        shape
            .minos()
            .iter()
            .any(|&(i, j, _)| self.grid.is_occupied(y + i, x + j))
    }

    /// Whether the falling piece cannot move one row down
    pub fn is_resting(&self) -> bool {
        match self.falling {
            Some(ref p) => self.collides(&p.shape, p.x, p.y + 1),
            None => false,
        }
    }

    /// Gravity step. Returns whether the engine is still running (unpaused).
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }

        if self.falling.is_none() {
            self.spawn_piece();
        } else {
            self.gravity_step();
        }

        !self.paused
    }

    /// Drop one row, or fix the piece if it is resting.
    fn gravity_step(&mut self) -> bool {
        let Some(piece) = self.falling else {
            return false;
        };

        if self.collides(&piece.shape, piece.x, piece.y + 1) {
            self.fix_block(piece);
        } else {
            self.falling = Some(FallingPiece {
                y: piece.y + 1,
                ..piece
            });
        }
        true
    }

    /// Merge `piece` into the grid and clear full rows.
    ///
    /// A piece resting at row 1 or above means the board is full: everything
    /// is reset instead and the piece is discarded. Either way the falling
    /// slot is empty afterwards.
    pub fn fix_block(&mut self, piece: FallingPiece) -> FixOutcome {
        if piece.y <= TOP_OUT_ROW {
            info!("top-out at row {}, resetting board", piece.y);
            self.reset();
            return FixOutcome::ToppedOut;
        }

        for (row, col, color) in piece.cells() {
            let placed = self.grid.set(row, col, color);
            debug_assert!(placed, "fixed cell ({}, {}) outside the grid", row, col);
        }
        self.falling = None;

        let lines_cleared = self.grid.clear_full_rows();
        if lines_cleared > 0 {
            debug!("cleared {} line(s)", lines_cleared);
        }
        debug!("fixed piece at ({}, {})", piece.x, piece.y);

        FixOutcome::Settled { lines_cleared }
    }

    fn can_move(&self) -> bool {
        !self.paused && self.falling.is_some()
    }

    /// Try to move the falling piece to column `x`
    fn try_shift(&mut self, x: usize) -> bool {
        let Some(piece) = self.falling else {
            return false;
        };
        if x == piece.x || self.collides(&piece.shape, x, piece.y) {
            return false;
        }
        self.falling = Some(FallingPiece { x, ..piece });
        true
    }

    pub fn move_left(&mut self) -> bool {
        if !self.can_move() {
            return false;
        }
        match self.falling {
            Some(p) => self.try_shift(p.x.saturating_sub(1)),
            None => false,
        }
    }

    pub fn move_right(&mut self) -> bool {
        if !self.can_move() {
            return false;
        }
        match self.falling {
            Some(p) => {
                let max_x = self.grid.columns().saturating_sub(p.shape.width());
                self.try_shift((p.x + 1).min(max_x))
            }
            None => false,
        }
    }

    /// Quarter-turn in place; rejected (shape kept) if the turned shape collides
    pub fn rotate(&mut self) -> bool {
        if !self.can_move() {
            return false;
        }
        let Some(piece) = self.falling else {
            return false;
        };

        let turned = piece.shape.rotated();
        if self.collides(&turned, piece.x, piece.y) {
            return false;
        }
        self.falling = Some(FallingPiece {
            shape: turned,
            ..piece
        });
        true
    }

    /// One immediate gravity step, independent of the clock
    pub fn soft_drop(&mut self) -> bool {
        if !self.can_move() {
            return false;
        }
        self.gravity_step()
    }

    /// Row the falling piece would come to rest on
    pub fn drop_row(&self) -> Option<usize> {
        let piece = self.falling?;
        let mut y = piece.y;
        while !self.collides(&piece.shape, piece.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Drop as far as possible, fix, and spawn the next piece.
    ///
    /// The next piece spawns even when the fix topped out, so play continues
    /// on the fresh board without waiting for a tick.
    pub fn hard_drop(&mut self) -> bool {
        if !self.can_move() {
            return false;
        }
        let (Some(piece), Some(y)) = (self.falling, self.drop_row()) else {
            return false;
        };

        self.fix_block(FallingPiece { y, ..piece });
        self.spawn_piece();
        true
    }

    /// Flip pause, or force it to `explicit`.
    ///
    /// Resuming does not run a catch-up tick.
    pub fn toggle_pause(&mut self, explicit: Option<bool>) {
        let paused = explicit.unwrap_or(!self.paused);
        if paused != self.paused {
            info!("{}", if paused { "paused" } else { "resumed" });
        }
        self.paused = paused;
    }

    /// Dispatch a command. Returns whether the state changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Rotate => self.rotate(),
            Command::SoftDrop => self.soft_drop(),
            Command::HardDrop => self.hard_drop(),
            Command::TogglePause => {
                self.toggle_pause(None);
                true
            }
            Command::NewGame => {
                self.new_game();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.rows = self.grid.rows();
        out.columns = self.grid.columns();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.falling = self.falling;
        out.paused = self.paused;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut s = BoardSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new(1)
    }
}
