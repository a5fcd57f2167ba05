//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line is a whole guess.

use crate::core::WORD_LEN;
use crate::engine::{GameEngine, GameObserver, Statistics};
use crate::input::InputEvent;
use crate::output::{print_board, print_game_over, print_statistics};
use anyhow::Result;
use rand::Rng;
use std::io::{self, Write};
use tracing::debug;

/// Type a whole guess into the current row and submit it
///
/// Characters are routed through the input adapter, so anything that is not a
/// letter is dropped. A line that does not hold exactly `WORD_LEN` letters is
/// rejected before anything is typed. If the row does not end up scored, the
/// typed letters are cleared again. Returns `true` if a row was scored.
pub fn submit_guess<O: GameObserver>(engine: &mut GameEngine<O>, guess: &str) -> bool {
    let events: Vec<InputEvent> = guess
        .chars()
        .filter_map(|c| InputEvent::from_raw(c.encode_utf8(&mut [0; 4])))
        .collect();
    if events.len() != WORD_LEN {
        debug!(letters = events.len(), "guess rejected, wrong length");
        return false;
    }

    for event in events {
        engine.apply(event);
    }

    if engine.apply(InputEvent::Submit) {
        return true;
    }
    while engine.apply(InputEvent::Backspace) {}
    false
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<R: Rng + ?Sized>(rng: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║          Wordle - Simple Mode        ║");
    println!("╚══════════════════════════════════════╝\n");
    println!("Guess the 5-letter word in 6 tries.");
    println!("Commands: 'quit' to exit, 'new' for a new game, 'stats' for statistics\n");

    let mut stats = Statistics::default();
    let mut engine = GameEngine::new(rng);
    print_board(engine.board());

    loop {
        let Some(input) = get_user_input(&format!("Guess {}", engine.current_row() + 1))? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                engine = GameEngine::new(rng);
                println!("\n🔄 New game started!");
                print_board(engine.board());
                continue;
            }
            "stats" => {
                print_statistics(&stats);
                continue;
            }
            guess => {
                if !submit_guess(&mut engine, guess) {
                    println!("❌ A guess must be exactly 5 letters\n");
                    continue;
                }
            }
        }

        print_board(engine.board());

        if engine.status().is_over() {
            stats.record(engine.state());
            print_game_over(engine.state());
            print_statistics(&stats);

            match get_user_input("\nPlay again? (yes/no)")?
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    engine = GameEngine::new(rng);
                    println!("\n🔄 New game started!");
                    print_board(engine.board());
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
