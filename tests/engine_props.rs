use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use wordle_game::core::{CellStatus, MAX_ROWS, TargetWord, WORD_LEN};
use wordle_game::engine::{GameEngine, GameStatus, NoopObserver};
use wordle_game::input::InputEvent;
use wordle_game::wordlists::{WORD_BANK, WORD_BANK_COUNT};

fn engine_for(index: usize) -> GameEngine<NoopObserver> {
    GameEngine::with_target(TargetWord::new(WORD_BANK[index]).unwrap(), NoopObserver)
}

fn type_word(engine: &mut GameEngine<NoopObserver>, word: &str) {
    for ch in word.chars() {
        engine.append_letter(ch);
    }
}

/// A five-letter word that is not the target
fn miss_for(target: &str) -> &'static str {
    if target == "zzzzz" { "yyyyy" } else { "zzzzz" }
}

fn input_event() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        6 => proptest::char::range('a', 'z').prop_map(InputEvent::Letter),
        1 => Just(InputEvent::Backspace),
        2 => Just(InputEvent::Submit),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Board shape and row invariants hold after any event sequence
    #[test]
    fn board_invariants_hold(
        index in 0..WORD_BANK_COUNT,
        events in proptest::collection::vec(input_event(), 0..80)
    ) {
        let mut engine = engine_for(index);
        let mut previous_status = GameStatus::Playing;

        for event in events {
            engine.apply(event);
            let state = engine.state();
            let board = state.board();
            let current = state.current_row();

            prop_assert_eq!(board.rows().len(), MAX_ROWS);
            prop_assert!(board.rows().iter().all(|row| row.len() == WORD_LEN));
            prop_assert!(current < MAX_ROWS);
            prop_assert!(board.filled_count(current) <= WORD_LEN);

            // Rows past the current one are untouched
            for row in &board.rows()[current + 1..] {
                prop_assert!(row.iter().all(|c| c.letter.is_none() && c.status == CellStatus::Empty));
            }
            // Rows before the current one are fully scored
            for row in &board.rows()[..current] {
                prop_assert!(row.iter().all(|c| c.letter.is_some() && c.status.is_scored()));
            }

            // Terminal states stay terminal
            if previous_status.is_over() {
                prop_assert_eq!(state.status(), previous_status);
            }
            previous_status = state.status();
        }
    }

    /// Appending past five letters never grows the row
    #[test]
    fn row_never_exceeds_five_letters(
        letters in proptest::collection::vec(proptest::char::range('a', 'z'), 0..20)
    ) {
        let mut engine = engine_for(0);
        for letter in letters {
            engine.append_letter(letter);
            prop_assert!(engine.board().filled_count(0) <= WORD_LEN);
        }
    }

    /// Backspace then a letter swaps only the last letter
    #[test]
    fn backspace_then_letter_replaces_last(
        prefix in "[a-z]{1,5}",
        replacement in proptest::char::range('a', 'z')
    ) {
        let mut engine = engine_for(0);
        type_word(&mut engine, &prefix);
        engine.backspace();
        engine.append_letter(replacement);

        let mut expected = prefix.clone();
        expected.pop();
        expected.push(replacement);
        prop_assert_eq!(engine.state().pending_guess(), expected);
    }

    /// Submitting an incomplete row changes nothing
    #[test]
    fn incomplete_submit_is_noop(
        index in 0..WORD_BANK_COUNT,
        partial in "[a-z]{0,4}"
    ) {
        let mut engine = engine_for(index);
        type_word(&mut engine, &partial);
        let before = engine.state().clone();

        prop_assert!(!engine.submit_row());
        prop_assert_eq!(engine.state(), &before);
    }

    /// Guessing the target wins on whichever row it is entered
    #[test]
    fn target_wins_on_any_row(index in 0..WORD_BANK_COUNT, misses in 0..MAX_ROWS) {
        let mut engine = engine_for(index);
        let target = WORD_BANK[index];
        for _ in 0..misses {
            type_word(&mut engine, miss_for(target));
            engine.submit_row();
        }

        type_word(&mut engine, target);
        prop_assert!(engine.submit_row());

        prop_assert_eq!(engine.status(), GameStatus::Won);
        prop_assert_eq!(engine.current_row(), misses);
        prop_assert!(engine.board().row(misses).iter().all(|c| c.status == CellStatus::Correct));
    }

    /// Six misses lose, and nothing can be typed afterwards
    #[test]
    fn six_misses_lose(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut engine = GameEngine::with_observer(&mut rng, NoopObserver);
        let miss = miss_for(engine.target().text());

        for row in 0..MAX_ROWS {
            prop_assert_eq!(engine.current_row(), row);
            prop_assert_eq!(engine.status(), GameStatus::Playing);
            type_word(&mut engine, miss);
            prop_assert!(engine.submit_row());
        }

        prop_assert_eq!(engine.status(), GameStatus::Lost);
        prop_assert_eq!(engine.current_row(), MAX_ROWS - 1);

        let before = engine.state().clone();
        prop_assert!(!engine.append_letter('a'));
        prop_assert!(!engine.backspace());
        prop_assert_eq!(engine.state(), &before);
    }

    /// Scoring: Correct exactly where letters match, Misplaced for any other
    /// letter present in the target
    #[test]
    fn scoring_matches_membership_rule(
        index in 0..WORD_BANK_COUNT,
        guess in "[a-z]{5}"
    ) {
        let mut engine = engine_for(index);
        let target = WORD_BANK[index];
        type_word(&mut engine, &guess);
        engine.submit_row();

        for ((cell, g), t) in engine.board().row(0).iter().zip(guess.chars()).zip(target.chars()) {
            let expected = if g == t {
                CellStatus::Correct
            } else if target.contains(g) {
                CellStatus::Misplaced
            } else {
                CellStatus::Incorrect
            };
            prop_assert_eq!(cell.status, expected);
            prop_assert_eq!(cell.letter, Some(g));
        }
    }
}
