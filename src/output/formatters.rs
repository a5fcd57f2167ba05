//! Formatting utilities for terminal output

use crate::core::{CellStatus, MAX_ROWS, Row};
use crate::engine::{GameState, GameStatus};

/// Emoji square for a cell status
#[must_use]
pub const fn status_to_emoji(status: CellStatus) -> char {
    match status {
        CellStatus::Correct => '🟩',
        CellStatus::Misplaced => '🟨',
        CellStatus::Incorrect => '⬛',
        CellStatus::Empty => '⬜',
    }
}

/// Format a row as emoji squares
#[must_use]
pub fn row_to_emoji(row: &Row) -> String {
    row.iter().map(|cell| status_to_emoji(cell.status)).collect()
}

/// Spoiler-free summary of a finished game
///
/// First line is `Wordle N/6` (or `X/6` for a loss), followed by one emoji line
/// per submitted row. Returns `None` while the game is still being played.
///
/// # Examples
/// ```
/// use wordle_game::core::TargetWord;
/// use wordle_game::engine::GameState;
/// use wordle_game::output::share_summary;
///
/// let mut state = GameState::new(TargetWord::new("apple").unwrap());
/// for ch in "apple".chars() {
///     state = state.with_letter(ch);
/// }
/// let state = state.submitted();
/// assert_eq!(share_summary(&state).unwrap(), "Wordle 1/6\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_summary(state: &GameState) -> Option<String> {
    let score = match state.status() {
        GameStatus::Playing => return None,
        GameStatus::Won => state.attempts().to_string(),
        GameStatus::Lost => "X".to_string(),
    };

    let mut lines = vec![format!("Wordle {score}/{MAX_ROWS}")];
    lines.extend(state.board().scored_rows().map(row_to_emoji));
    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TargetWord;

    fn play(target: &str, guesses: &[&str]) -> GameState {
        let mut state = GameState::new(TargetWord::new(target).unwrap());
        for guess in guesses {
            for ch in guess.chars() {
                state = state.with_letter(ch);
            }
            state = state.submitted();
        }
        state
    }

    #[test]
    fn empty_row_is_white() {
        let state = play("apple", &[]);
        assert_eq!(row_to_emoji(state.board().row(0)), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn mixed_row() {
        let state = play("mango", &["goody"]);
        assert_eq!(row_to_emoji(state.board().row(0)), "🟨🟨🟨⬛⬛");
    }

    #[test]
    fn no_summary_while_playing() {
        assert!(share_summary(&play("apple", &["grape"])).is_none());
    }

    #[test]
    fn summary_after_win() {
        let summary = share_summary(&play("apple", &["apply", "apple"])).unwrap();
        assert_eq!(summary, "Wordle 2/6\n🟩🟩🟩🟩⬛\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn summary_after_loss() {
        let summary = share_summary(&play("apple", &["lemon"; MAX_ROWS])).unwrap();
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[0], "Wordle X/6");
        assert_eq!(lines.len(), MAX_ROWS + 1);
        // "lemon" shares l and e with "apple"
        assert!(lines[1..].iter().all(|line| *line == "🟨🟨⬛⬛⬛"));
    }
}
