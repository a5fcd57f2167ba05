//! Word bank for target selection
//!
//! The bank is a fixed list compiled into the binary. A game's target is drawn
//! from it by a uniform random index.

use crate::core::TargetWord;
use rand::Rng;

/// Candidate target words
pub const WORD_BANK: [&str; WORD_BANK_COUNT] = [
    "apple", "mango", "grape", "lemon", "peach", "melon", "berry", "guava", "olive", "prune",
];

/// Number of words in `WORD_BANK`
pub const WORD_BANK_COUNT: usize = 10;

/// Draw a bank index uniformly from `0..WORD_BANK_COUNT`
///
/// The upper bound is exclusive, so every drawn index names a word.
pub fn pick_index<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.random_range(0..WORD_BANK_COUNT)
}

/// Look up the target word at a bank index
///
/// Returns `None` for an index past the end of the bank.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::target_at;
///
/// assert_eq!(target_at(1).unwrap().text(), "mango");
/// assert!(target_at(10).is_none());
/// ```
#[must_use]
pub fn target_at(index: usize) -> Option<TargetWord> {
    WORD_BANK
        .get(index)
        .and_then(|&word| TargetWord::new(word).ok())
}

/// Draw a target word from the bank
///
/// Returns the drawn index alongside the word.
///
/// # Panics
/// Will not panic - `pick_index` stays inside the bank and every bank entry is
/// a valid target.
pub fn pick_target<R: Rng + ?Sized>(rng: &mut R) -> (usize, TargetWord) {
    let index = pick_index(rng);
    let target = target_at(index).expect("drawn index is inside the bank");
    (index, target)
}
