//! Wordle Game
//!
//! A single-player word-guessing game: a 6×5 board is filled row by row with
//! guesses against a secret five-letter word, and each submitted row is scored
//! letter by letter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{CellStatus, TargetWord};
//! use wordle_game::engine::{GameEngine, GameStatus, NoopObserver};
//! use wordle_game::input::InputEvent;
//!
//! let mut engine = GameEngine::with_target(TargetWord::new("apple").unwrap(), NoopObserver);
//! for key in ["a", "p", "p", "l", "y", "Enter"] {
//!     if let Some(event) = InputEvent::from_raw(key) {
//!         engine.apply(event);
//!     }
//! }
//!
//! assert_eq!(engine.board().row(0)[4].status, CellStatus::Incorrect);
//! assert_eq!(engine.current_row(), 1);
//! assert_eq!(engine.status(), GameStatus::Playing);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod engine;

// Key input adapter
pub mod input;

// Word bank
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
