//! Terminal output formatting
//!
//! Plain-terminal rendering of the board and end-of-game summaries.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_over, print_statistics};
pub use formatters::{row_to_emoji, share_summary, status_to_emoji};
