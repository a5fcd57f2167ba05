//! Game engine
//!
//! `GameEngine` owns the current `GameState` and replaces it wholesale on every
//! input. Notable events go to a `GameObserver`.

mod observer;
mod state;
mod stats;

pub use observer::{GameEvent, GameObserver, NoopObserver, TracingObserver};
pub use state::{GameState, GameStatus};
pub use stats::Statistics;

use crate::core::{Board, TargetWord};
use crate::input::InputEvent;
use crate::wordlists::pick_target;
use rand::Rng;

/// Single-player game engine
///
/// Input is routed through `append_letter`, `backspace` and `submit_row` (or
/// `apply` for an `InputEvent`). Out-of-turn or invalid input is ignored.
#[derive(Debug)]
pub struct GameEngine<O: GameObserver = TracingObserver> {
    state: GameState,
    observer: O,
}

impl GameEngine<TracingObserver> {
    /// Start a game with a target drawn from the word bank
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_observer(rng, TracingObserver)
    }
}

impl<O: GameObserver> GameEngine<O> {
    /// Start a game with a random target, reporting to `observer`
    pub fn with_observer<R: Rng + ?Sized>(rng: &mut R, observer: O) -> Self {
        let (index, target) = pick_target(rng);
        observer.notify(&GameEvent::TargetChosen { index });
        Self::with_target(target, observer)
    }

    /// Start a game with a known target
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::TargetWord;
    /// use wordle_game::engine::{GameEngine, GameStatus, NoopObserver};
    ///
    /// let mut engine = GameEngine::with_target(TargetWord::new("lemon").unwrap(), NoopObserver);
    /// for ch in "lemon".chars() {
    ///     engine.append_letter(ch);
    /// }
    /// engine.submit_row();
    /// assert_eq!(engine.status(), GameStatus::Won);
    /// ```
    pub const fn with_target(target: TargetWord, observer: O) -> Self {
        Self {
            state: GameState::new(target),
            observer,
        }
    }

    /// Current state snapshot
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        self.state.board()
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status()
    }

    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.state.current_row()
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &TargetWord {
        self.state.target()
    }

    #[inline]
    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Route an input event to its operation
    ///
    /// Returns `true` if the state changed.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Letter(letter) => self.append_letter(letter),
            InputEvent::Backspace => self.backspace(),
            InputEvent::Submit => self.submit_row(),
        }
    }

    /// Put a letter in the next free cell of the current row
    ///
    /// Returns `true` if the letter was placed.
    pub fn append_letter(&mut self, letter: char) -> bool {
        let changed = self.replace_state(|state| state.with_letter(letter));
        if !changed {
            self.observer.notify(&GameEvent::LetterRejected { letter });
        }
        changed
    }

    /// Clear the last letter of the current row
    ///
    /// Returns `true` if a letter was removed.
    pub fn backspace(&mut self) -> bool {
        self.replace_state(GameState::without_last_letter)
    }

    /// Score the current row
    ///
    /// Returns `true` if the row was complete and got scored.
    pub fn submit_row(&mut self) -> bool {
        if self.state.status().is_over() {
            return false;
        }
        let row = self.state.current_row();
        if !self.state.row_ready() {
            self.observer.notify(&GameEvent::IncompleteSubmit { row });
            return false;
        }

        let guess = self.state.pending_guess();
        self.replace_state(GameState::submitted);

        let statuses = self.state.board().row(row).map(|cell| cell.status);
        self.observer.notify(&GameEvent::RowSubmitted {
            row,
            guess,
            statuses,
        });
        match self.state.status() {
            GameStatus::Won => self.observer.notify(&GameEvent::Won {
                attempts: self.state.attempts(),
            }),
            GameStatus::Lost => self.observer.notify(&GameEvent::Lost),
            GameStatus::Playing => {}
        }
        true
    }

    fn replace_state(&mut self, transition: impl FnOnce(GameState) -> GameState) -> bool {
        let next = transition(self.state.clone());
        let changed = next != self.state;
        self.state = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::observer::RecordingObserver;
    use super::*;
    use crate::core::{CellStatus, MAX_ROWS, WORD_LEN};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn engine(target: &str) -> GameEngine<RecordingObserver> {
        GameEngine::with_target(TargetWord::new(target).unwrap(), RecordingObserver::new())
    }

    fn type_word<O: GameObserver>(engine: &mut GameEngine<O>, word: &str) {
        for ch in word.chars() {
            engine.append_letter(ch);
        }
    }

    #[test]
    fn random_target_comes_from_bank() {
        let mut rng = StdRng::seed_from_u64(9);
        let engine = GameEngine::with_observer(&mut rng, RecordingObserver::new());
        let events = engine.observer().take();

        let GameEvent::TargetChosen { index } = events[0] else {
            panic!("expected TargetChosen, got {events:?}");
        };
        assert_eq!(engine.target().text(), crate::wordlists::WORD_BANK[index]);
        assert_eq!(engine.status(), GameStatus::Playing);
        assert_eq!(engine.current_row(), 0);
    }

    #[test]
    fn debug_shows_state() {
        let mut engine = GameEngine::with_target(TargetWord::new("melon").unwrap(), NoopObserver);
        engine.append_letter('m');
        let debug = format!("{engine:?}");
        assert!(debug.starts_with("GameEngine"));
        assert!(debug.contains("melon"));
        assert!(debug.contains("NoopObserver"));
    }

    #[test]
    fn apply_routes_events() {
        let mut engine = engine("apple");
        assert!(engine.apply(InputEvent::Letter('a')));
        assert!(engine.apply(InputEvent::Backspace));
        assert!(!engine.apply(InputEvent::Backspace));
        assert!(!engine.apply(InputEvent::Submit));
        assert_eq!(engine.board(), &Board::new());
    }

    #[test]
    fn full_row_rejects_letters() {
        let mut engine = engine("apple");
        type_word(&mut engine, "grape");
        engine.observer().take();

        assert!(!engine.append_letter('x'));
        assert_eq!(engine.state().pending_guess(), "grape");
        assert_eq!(
            engine.observer().take(),
            vec![GameEvent::LetterRejected { letter: 'x' }]
        );
    }

    #[test]
    fn incomplete_submit_reports_and_keeps_state() {
        let mut engine = engine("apple");
        type_word(&mut engine, "gra");
        let before = engine.state().clone();

        assert!(!engine.submit_row());
        assert_eq!(engine.state(), &before);
        assert_eq!(
            engine.observer().take().last(),
            Some(&GameEvent::IncompleteSubmit { row: 0 })
        );
    }

    #[test]
    fn submit_reports_scored_row() {
        let mut engine = engine("apple");
        type_word(&mut engine, "apply");
        engine.observer().take();

        assert!(engine.submit_row());
        assert_eq!(engine.current_row(), 1);
        assert_eq!(
            engine.observer().take(),
            vec![GameEvent::RowSubmitted {
                row: 0,
                guess: "apply".to_string(),
                statuses: [
                    CellStatus::Correct,
                    CellStatus::Correct,
                    CellStatus::Correct,
                    CellStatus::Correct,
                    CellStatus::Incorrect,
                ],
            }]
        );
    }

    #[test]
    fn win_on_third_row() {
        let mut engine = engine("melon");
        for word in ["grape", "lemon", "melon"] {
            type_word(&mut engine, word);
            engine.submit_row();
        }
        assert_eq!(engine.status(), GameStatus::Won);
        assert_eq!(engine.current_row(), 2);
        assert_eq!(
            engine.observer().take().last(),
            Some(&GameEvent::Won { attempts: 3 })
        );

        // Terminal: nothing changes the board any more
        let before = engine.state().clone();
        assert!(!engine.append_letter('a'));
        assert!(!engine.backspace());
        assert!(!engine.submit_row());
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn loss_after_six_rows() {
        let mut engine = engine("mango");
        for _ in 0..MAX_ROWS {
            type_word(&mut engine, "lemon");
            assert!(engine.submit_row());
        }
        assert_eq!(engine.status(), GameStatus::Lost);
        assert_eq!(engine.current_row(), MAX_ROWS - 1);
        assert_eq!(engine.observer().take().last(), Some(&GameEvent::Lost));

        // No seventh row
        assert!(!engine.append_letter('a'));
        assert!(
            engine
                .board()
                .rows()
                .iter()
                .all(|row| row.len() == WORD_LEN)
        );
    }
}
