//! Terminal front-end for the board engine.
//!
//! This is the thin layer around `core`: it paints snapshots into a simple
//! framebuffer, flushes that framebuffer to the terminal, and keeps the
//! fixed-interval clock that drives gravity.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view code pure so it can be asserted on without a terminal
//! - 2 chars wide per board cell to keep blocks roughly square

pub mod clock;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use micro_tetris_core as core;
pub use micro_tetris_types as types;

pub use clock::GravityClock;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_into, TerminalRenderer};
