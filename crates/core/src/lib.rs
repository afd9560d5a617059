//! Core game logic - the board simulation engine
//!
//! This crate contains the grid model, the falling piece's movement, rotation
//! and collision rules, the gravity tick, line clearing and the pause state
//! machine. It has **no** dependency on terminals, timers or I/O:
//!
//! - **Deterministic**: the same seed spawns the same pieces
//! - **Externally driven**: a clock calls `tick()`, the input layer calls commands
//! - **Instantiable**: every engine is an independent value, no global state
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size settled-block matrix with line clearing
//! - [`pieces`]: the seven shape matrices and quarter-turn rotation
//! - [`engine`]: [`BoardEngine`], tick/commands/pause
//! - [`config`]: board geometry and tick interval, validated
//! - [`rng`]: seeded spawn randomness
//! - [`snapshot`]: owned read-only view for renderers
//!
//! # Rules
//!
//! - Pieces spawn at the top row, horizontally centered, in a random orientation
//! - One collision test (walls, floor, settled cells) gates gravity, moves,
//!   rotation and hard drop; there are no wall kicks
//! - Full rows are removed and replaced by empty rows at the top
//! - A piece coming to rest at row 1 or above resets the board
//!
//! # Example
//!
//! ```
//! use micro_tetris_core::BoardEngine;
//! use micro_tetris_types::Command;
//!
//! let mut engine = BoardEngine::new(12345);
//! assert!(engine.tick()); // spawns the first piece
//!
//! engine.apply(Command::MoveRight);
//! engine.apply(Command::Rotate);
//! engine.apply(Command::HardDrop);
//!
//! assert!(engine.grid().occupied_count() > 0);
//! ```

pub mod config;
pub mod engine;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use micro_tetris_types as types;

pub use config::{ConfigError, EngineConfig};
pub use engine::{BoardEngine, FallingPiece, FixOutcome};
pub use grid::Grid;
pub use pieces::PieceShape;
pub use rng::SimpleRng;
pub use snapshot::BoardSnapshot;
