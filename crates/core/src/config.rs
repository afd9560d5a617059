//! Engine configuration: board geometry and gravity interval.

use thiserror::Error;

use crate::types::{
    DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_BOARD_EDGE, MIN_BOARD_EDGE, TICK_INTERVAL_MS,
};

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board {rows}x{columns} is too small (minimum {min}x{min})")]
    TooSmall {
        rows: usize,
        columns: usize,
        min: usize,
    },

    #[error("board {rows}x{columns} is too large (maximum {max}x{max})")]
    TooLarge {
        rows: usize,
        columns: usize,
        max: usize,
    },

    #[error("tick interval must be greater than zero")]
    ZeroInterval,
}

/// Board geometry and the cadence the clock should drive `tick()` at.
///
/// The engine itself never sleeps; `tick_interval_ms` is carried here so the
/// front-end reads one source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineConfig {
    pub rows: usize,
    pub columns: usize,
    pub tick_interval_ms: u64,
}

impl EngineConfig {
    pub fn with_size(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    pub fn with_tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Check that every orientation of every piece fits, the board stays
    /// within `MAX_BOARD_EDGE` on both axes and the clock can run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MIN_BOARD_EDGE || self.columns < MIN_BOARD_EDGE {
            return Err(ConfigError::TooSmall {
                rows: self.rows,
                columns: self.columns,
                min: MIN_BOARD_EDGE,
            });
        }
        if self.rows > MAX_BOARD_EDGE || self.columns > MAX_BOARD_EDGE {
            return Err(ConfigError::TooLarge {
                rows: self.rows,
                columns: self.columns,
                max: MAX_BOARD_EDGE,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}
