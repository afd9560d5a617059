//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and focus events into [`crate::types::Command`]s. Every
//! key press is one discrete command; there is no auto-repeat handling beyond
//! what the terminal itself sends.

pub mod map;

pub use micro_tetris_types as types;

pub use map::{handle_key_event, should_quit, translate, Input};
