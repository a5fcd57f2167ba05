//! Board cells and their scoring status

/// Scoring outcome of a single cell
///
/// `Empty` until the cell's row is submitted; afterwards one of the three
/// scored variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellStatus {
    #[default]
    Empty,
    /// Letter matches the target at this exact position
    Correct,
    /// Letter appears somewhere else in the target
    Misplaced,
    /// Letter does not appear in the target
    Incorrect,
}

impl CellStatus {
    /// Visual class name used by renderers
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::CellStatus;
    ///
    /// assert_eq!(CellStatus::Misplaced.class_name(), "misplaced");
    /// ```
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Correct => "correct",
            Self::Misplaced => "misplaced",
            Self::Incorrect => "incorrect",
        }
    }

    /// Check if the cell has been scored
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Ordering used when merging what is known about a letter across rows
    #[must_use]
    pub(crate) const fn rank(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Incorrect => 1,
            Self::Misplaced => 2,
            Self::Correct => 3,
        }
    }
}

/// One letter slot on the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub status: CellStatus,
}

impl Cell {
    /// An empty cell: no letter, unscored
    pub const EMPTY: Self = Self {
        letter: None,
        status: CellStatus::Empty,
    };

    /// A cell holding a letter that has not been scored yet
    #[must_use]
    pub const fn with_letter(letter: char) -> Self {
        Self {
            letter: Some(letter),
            status: CellStatus::Empty,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.letter.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_empty() {
        assert_eq!(Cell::default(), Cell::EMPTY);
        assert!(!Cell::EMPTY.is_filled());
        assert!(!Cell::EMPTY.status.is_scored());
    }

    #[test]
    fn class_names_are_distinct() {
        let names = [
            CellStatus::Empty,
            CellStatus::Correct,
            CellStatus::Misplaced,
            CellStatus::Incorrect,
        ]
        .map(CellStatus::class_name);
        assert_eq!(names, ["empty", "correct", "misplaced", "incorrect"]);
    }

    #[test]
    fn rank_orders_knowledge() {
        assert!(CellStatus::Correct.rank() > CellStatus::Misplaced.rank());
        assert!(CellStatus::Misplaced.rank() > CellStatus::Incorrect.rank());
        assert!(CellStatus::Incorrect.rank() > CellStatus::Empty.rank());
    }
}
