//! Game state snapshot and its transitions
//!
//! Every transition consumes the snapshot and returns its replacement, so a
//! caller only ever observes whole states.

use crate::core::{Board, MAX_ROWS, TargetWord, is_winning_row, score_row};

/// Overall game status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// `Won` and `Lost` accept no further input
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: TargetWord,
    board: Board,
    current_row: usize,
    status: GameStatus,
}

impl GameState {
    /// Fresh game: empty board, first row, playing
    #[must_use]
    pub const fn new(target: TargetWord) -> Self {
        Self {
            target,
            board: Board::new(),
            current_row: 0,
            status: GameStatus::Playing,
        }
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &TargetWord {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Index of the row accepting input (0-5)
    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of rows that have been submitted
    #[must_use]
    pub const fn attempts(&self) -> usize {
        match self.status {
            GameStatus::Playing => self.current_row,
            GameStatus::Won | GameStatus::Lost => self.current_row + 1,
        }
    }

    /// Append a letter to the current row
    ///
    /// Ignored once the game is over, for non-letters, and on a full row.
    /// Letters are stored lowercase.
    #[must_use]
    pub fn with_letter(mut self, letter: char) -> Self {
        if self.status.is_over() || !letter.is_ascii_alphabetic() {
            return self;
        }
        self.board
            .push_letter(self.current_row, letter.to_ascii_lowercase());
        self
    }

    /// Remove the rightmost letter of the current row
    ///
    /// Ignored once the game is over and on an empty row.
    #[must_use]
    pub fn without_last_letter(mut self) -> Self {
        if self.status.is_over() {
            return self;
        }
        self.board.pop_letter(self.current_row);
        self
    }

    /// Score the current row and advance the game
    ///
    /// Ignored when the row is incomplete or the game is over.
    #[must_use]
    pub fn submitted(mut self) -> Self {
        if self.status.is_over() {
            return self;
        }
        let Some(guess) = self.board.row_letters(self.current_row) else {
            return self;
        };

        let row = score_row(&guess, &self.target);
        self.board.set_row(self.current_row, row);

        if is_winning_row(&row) {
            self.status = GameStatus::Won;
        } else if self.current_row == MAX_ROWS - 1 {
            self.status = GameStatus::Lost;
        } else {
            self.current_row += 1;
        }
        self
    }

    /// Letters typed into the current row so far
    #[must_use]
    pub fn pending_guess(&self) -> String {
        self.board
            .row(self.current_row)
            .iter()
            .filter_map(|cell| cell.letter)
            .collect()
    }

    /// Check if the current row holds a full guess
    #[must_use]
    pub fn row_ready(&self) -> bool {
        self.board.is_row_complete(self.current_row)
    }
}
