//! Display functions for the line-mode front end

use super::formatters::share_summary;
use crate::core::{Board, Cell, CellStatus};
use crate::engine::{GameState, GameStatus, Statistics};
use colored::{ColoredString, Colorize};

fn paint_cell(cell: &Cell) -> ColoredString {
    let text = format!(
        " {} ",
        cell.letter.map_or('_', |l| l.to_ascii_uppercase())
    );
    match cell.status {
        CellStatus::Correct => text.black().on_green().bold(),
        CellStatus::Misplaced => text.black().on_yellow().bold(),
        CellStatus::Incorrect => text.white().on_bright_black(),
        CellStatus::Empty => text.normal(),
    }
}

/// Print the board, one row per line
pub fn print_board(board: &Board) {
    println!();
    for row in board.rows() {
        let line: Vec<String> = row.iter().map(|cell| paint_cell(cell).to_string()).collect();
        println!("   {}", line.join(" "));
    }
    println!();
}

/// Print the win/loss banner and the share summary
pub fn print_game_over(state: &GameState) {
    println!("{}", "═".repeat(40).cyan());
    match state.status() {
        GameStatus::Won => {
            let attempts = state.attempts();
            println!(
                "{}",
                format!(
                    "🎉 Solved in {attempts} {}!",
                    if attempts == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "{} {}",
                "❌ Out of guesses. The word was".red().bold(),
                state.target().text().to_uppercase().bright_yellow().bold()
            );
        }
        GameStatus::Playing => return,
    }
    if let Some(summary) = share_summary(state) {
        println!("\n{summary}");
    }
    println!("{}", "═".repeat(40).cyan());
}

/// Print session statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:          {}", stats.total_games);
    println!(
        "   Win rate:        {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let width = if most == 0 { 0 } else { count * 20 / most };
        println!(
            "   {}: {}{} {count}",
            i + 1,
            "█".repeat(width).green(),
            "░".repeat(20 - width).bright_black()
        );
    }
}
