//! micro-tetris (workspace facade crate).
//!
//! Re-exports `micro_tetris::{core,input,term,types}` so the binary, the
//! integration tests and the benchmarks share one import path while the code
//! lives in dedicated crates under `crates/`.

pub mod cli;

pub use micro_tetris_core as core;
pub use micro_tetris_input as input;
pub use micro_tetris_term as term;
pub use micro_tetris_types as types;
