//! Core domain types for the game
//!
//! Board cells, the fixed 6×5 board, the target word, and the row scoring
//! rule. Everything here is pure and synchronous.

mod board;
mod cell;
mod scoring;
mod word;

pub use board::{Board, Row};
pub use cell::{Cell, CellStatus};
pub use scoring::{is_winning_row, score_letters, score_row};
pub use word::{TargetWord, WordError};

/// Letters per guess
pub const WORD_LEN: usize = 5;

/// Guesses per game
pub const MAX_ROWS: usize = 6;
