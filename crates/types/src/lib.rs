//! Core types module - shared data structures and constants
//!
//! This crate defines the vocabulary shared by the engine, the input mapping and
//! the terminal front-end. Everything here is plain data with no dependencies.
//!
//! # Board Dimensions
//!
//! - **Rows**: 20 (row 0 is the top)
//! - **Columns**: 11
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_INTERVAL_MS` | 800 | Gravity step interval |
//!
//! # Examples
//!
//! ```
//! use micro_tetris_types::{Command, PieceKind, DEFAULT_COLUMNS, DEFAULT_ROWS};
//!
//! assert_eq!(PieceKind::T.color(), 3);
//! assert_eq!(PieceKind::T.as_str(), "t");
//! assert_ne!(Command::HardDrop, Command::SoftDrop);
//!
//! assert_eq!(DEFAULT_ROWS, 20);
//! assert_eq!(DEFAULT_COLUMNS, 11);
//! ```

/// Default number of board rows
pub const DEFAULT_ROWS: usize = 20;

/// Default number of board columns
pub const DEFAULT_COLUMNS: usize = 11;

/// Default gravity interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 800;

/// Smallest board edge that still fits every orientation of every piece
pub const MIN_BOARD_EDGE: usize = 4;

/// Largest board edge accepted by the engine
pub const MAX_BOARD_EDGE: usize = 255;

/// A piece fixed at or above this row tops out the board
pub const TOP_OUT_ROW: usize = 1;

/// Number of palette entries (color indices run `1..=PALETTE_SIZE`)
pub const PALETTE_SIZE: u8 = 7;

/// A cell on the game board or in a piece matrix
///
/// - `0` ([`EMPTY`]): empty / transparent
/// - `1..=7`: color index into [`PALETTE`]
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;

/// Palette colors as RGB triplets, indexed by `color - 1`
pub const PALETTE: [(u8, u8, u8); PALETTE_SIZE as usize] = [
    (255, 255, 0),   // 1 yellow
    (0, 255, 0),     // 2 green
    (51, 51, 255),   // 3 blue
    (255, 0, 255),   // 4 purple
    (0, 255, 255),   // 5 cyan
    (255, 0, 0),     // 6 red
    (255, 255, 255), // 7 white
];

/// Look up the RGB color of a non-empty cell
///
/// Returns `None` for [`EMPTY`] and for out-of-palette values.
///
/// ```
/// use micro_tetris_types::palette_rgb;
///
/// assert_eq!(palette_rgb(0), None);
/// assert_eq!(palette_rgb(6), Some((255, 0, 0)));
/// ```
pub fn palette_rgb(cell: Cell) -> Option<(u8, u8, u8)> {
    match cell {
        1..=PALETTE_SIZE => Some(PALETTE[(cell - 1) as usize]),
        _ => None,
    }
}

/// The seven tetromino kinds
///
/// Each kind has a single fixed color:
/// - **L**: green
/// - **J**: red (reversed L)
/// - **T**: blue
/// - **I**: purple
/// - **Z**: white
/// - **S**: yellow
/// - **O**: cyan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    L,
    J,
    T,
    I,
    Z,
    S,
    O,
}

impl PieceKind {
    /// All kinds, in spawn-table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
        PieceKind::I,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::O,
    ];

    /// Color index painted by this kind
    pub fn color(&self) -> Cell {
        match self {
            PieceKind::S => 1,
            PieceKind::L => 2,
            PieceKind::T => 3,
            PieceKind::I => 4,
            PieceKind::O => 5,
            PieceKind::J => 6,
            PieceKind::Z => 7,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::T => "t",
            PieceKind::I => "i",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::O => "o",
        }
    }
}

/// Commands accepted by the board engine
///
/// Physical keys are mapped to these by the input layer; the engine only ever
/// sees the closed set below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Quarter-turn the piece in place
    Rotate,
    /// One immediate gravity step
    SoftDrop,
    /// Drop to the lowest free row and fix
    HardDrop,
    /// Flip the pause state
    TogglePause,
    /// Clear the board and start over
    NewGame,
}
