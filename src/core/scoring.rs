//! Row scoring against the target word
//!
//! Each guessed letter is classified independently:
//! - `Correct` if it equals the target letter at the same position
//! - `Misplaced` if it appears anywhere else in the target
//! - `Incorrect` otherwise
//!
//! The presence check is a plain membership test and does not count letter
//! frequencies, so a guess with a repeated letter can have every copy marked
//! `Misplaced` even when the target holds that letter only once.

use super::{Cell, CellStatus, Row, TargetWord, WORD_LEN};

/// Classify each guessed letter against the target
///
/// # Examples
/// ```
/// use wordle_game::core::{score_letters, CellStatus::*, TargetWord};
///
/// let target = TargetWord::new("mango").unwrap();
/// let statuses = score_letters(&['g', 'o', 'o', 'd', 'y'], &target);
/// assert_eq!(statuses, [Misplaced, Misplaced, Misplaced, Incorrect, Incorrect]);
/// ```
#[must_use]
pub fn score_letters(guess: &[char; WORD_LEN], target: &TargetWord) -> [CellStatus; WORD_LEN] {
    let mut result = [CellStatus::Incorrect; WORD_LEN];

    for (i, (&letter, status)) in guess.iter().zip(result.iter_mut()).enumerate() {
        *status = if letter == target.char_at(i) {
            CellStatus::Correct
        } else if target.contains(letter) {
            CellStatus::Misplaced
        } else {
            CellStatus::Incorrect
        };
    }

    result
}

/// Build the scored row for a complete guess
#[must_use]
pub fn score_row(guess: &[char; WORD_LEN], target: &TargetWord) -> Row {
    let statuses = score_letters(guess, target);
    let mut row = [Cell::EMPTY; WORD_LEN];
    for ((cell, &letter), status) in row.iter_mut().zip(guess).zip(statuses) {
        *cell = Cell {
            letter: Some(letter),
            status,
        };
    }
    row
}

/// Check if every cell of a row is `Correct`
#[inline]
#[must_use]
pub fn is_winning_row(row: &Row) -> bool {
    row.iter().all(|cell| cell.status == CellStatus::Correct)
}
