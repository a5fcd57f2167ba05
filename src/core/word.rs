//! Target word representation
//!
//! A `TargetWord` stores the secret 5-letter word along with the set of
//! letters it contains, used for membership checks during scoring.

use super::WORD_LEN;
use rustc_hash::FxHashSet;
use std::fmt;

/// The secret 5-letter word the player is guessing
///
/// Immutable once built. Stores the word as bytes and keeps its distinct
/// letters in a set so membership checks don't rescan the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    text: String,
    chars: [u8; WORD_LEN],
    letters: FxHashSet<u8>,
}

/// Error type for invalid target words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl TargetWord {
    /// Create a new target word from a string
    ///
    /// The text is normalized to lowercase before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::TargetWord;
    ///
    /// let word = TargetWord::new("Apple").unwrap();
    /// assert_eq!(word.text(), "apple");
    ///
    /// assert!(TargetWord::new("too long").is_err());
    /// assert!(TargetWord::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = chars.iter().copied().collect();

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        char::from(self.chars[position])
    }

    /// Check if the word contains a letter anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        u8::try_from(letter).is_ok_and(|byte| self.letters.contains(&byte))
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
