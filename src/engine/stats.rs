//! Session statistics
//!
//! Kept in memory for the lifetime of the process only.

use super::{GameState, GameStatus};
use crate::core::MAX_ROWS;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses; index 0 is a first-row win
    pub guess_distribution: [usize; MAX_ROWS],
    pub current_streak: usize,
    pub max_streak: usize,
}

impl Statistics {
    /// Record a finished game
    ///
    /// Games still in progress are not counted.
    pub fn record(&mut self, state: &GameState) {
        match state.status() {
            GameStatus::Playing => {}
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
                self.guess_distribution[state.attempts() - 1] += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            GameStatus::Lost => {
                self.total_games += 1;
                self.current_streak = 0;
            }
        }
    }

    /// Percentage of finished games that were won
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Game counts are far below 2^52
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
