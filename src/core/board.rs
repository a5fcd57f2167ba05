//! Fixed 6×5 game board
//!
//! The grid dimensions are part of the type, so no operation can produce a
//! board of any other shape.

use super::{Cell, CellStatus, MAX_ROWS, WORD_LEN};

/// One guess row
pub type Row = [Cell; WORD_LEN];

/// The game board: `MAX_ROWS` rows of `WORD_LEN` cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    rows: [Row; MAX_ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board with every cell empty
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: [[Cell::EMPTY; WORD_LEN]; MAX_ROWS],
        }
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_ROWS] {
        &self.rows
    }

    /// Get a row by index
    ///
    /// # Panics
    /// Panics if `index >= MAX_ROWS`
    #[inline]
    #[must_use]
    pub const fn row(&self, index: usize) -> &Row {
        &self.rows[index]
    }

    /// Place a letter in the first empty cell of a row
    ///
    /// Returns `false` if the row is already full.
    pub fn push_letter(&mut self, row: usize, letter: char) -> bool {
        match self.rows[row].iter_mut().find(|cell| !cell.is_filled()) {
            Some(cell) => {
                *cell = Cell::with_letter(letter);
                true
            }
            None => false,
        }
    }

    /// Clear the rightmost filled cell of a row
    ///
    /// Returns `false` if the row has no letters.
    pub fn pop_letter(&mut self, row: usize) -> bool {
        match self.rows[row].iter_mut().rev().find(|cell| cell.is_filled()) {
            Some(cell) => {
                *cell = Cell::EMPTY;
                true
            }
            None => false,
        }
    }

    /// Letters of a row, if every cell holds one
    #[must_use]
    pub fn row_letters(&self, row: usize) -> Option<[char; WORD_LEN]> {
        let mut letters = [' '; WORD_LEN];
        for (slot, cell) in letters.iter_mut().zip(&self.rows[row]) {
            *slot = cell.letter?;
        }
        Some(letters)
    }

    #[must_use]
    pub fn is_row_complete(&self, row: usize) -> bool {
        self.rows[row].iter().all(Cell::is_filled)
    }

    #[must_use]
    pub fn filled_count(&self, row: usize) -> usize {
        self.rows[row].iter().filter(|cell| cell.is_filled()).count()
    }

    /// Replace a row wholesale
    pub fn set_row(&mut self, row: usize, cells: Row) {
        self.rows[row] = cells;
    }

    /// Rows that have been scored, top to bottom
    pub fn scored_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows
            .iter()
            .take_while(|row| row.iter().all(|cell| cell.status.is_scored()))
    }

    /// Best known status for each letter `a`-`z` across all scored cells
    ///
    /// Index 0 is `a`. A letter never guessed stays `Empty`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Board, CellStatus};
    ///
    /// let board = Board::new();
    /// assert!(board.letter_summary().iter().all(|s| *s == CellStatus::Empty));
    /// ```
    #[must_use]
    pub fn letter_summary(&self) -> [CellStatus; 26] {
        let mut summary = [CellStatus::Empty; 26];
        for cell in self.rows.iter().flatten() {
            let Some(letter) = cell.letter else { continue };
            if !letter.is_ascii_lowercase() {
                continue;
            }
            let slot = &mut summary[usize::from(letter as u8 - b'a')];
            if cell.status.rank() > slot.rank() {
                *slot = cell.status;
            }
        }
        summary
    }
}
