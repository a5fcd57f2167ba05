//! Wordle Game - CLI
//!
//! Play Wordle in the terminal, either in a full-screen TUI or line by line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::commands::run_simple;
use wordle_game::interactive::{App, run_tui};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the target word draw (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Write diagnostic logs to this file
    #[arg(short, long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-by-line mode without the TUI
    Simple,
}

/// Install the tracing subscriber
///
/// With a log file, everything from `debug` up goes to the file. Without one,
/// logs go to stderr filtered by `RUST_LOG` (default `warn`), except in TUI
/// mode where stderr would corrupt the screen and no subscriber is installed.
fn init_logging(log_file: Option<&Path>, stderr_allowed: bool) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        None if stderr_allowed => {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr))
                .init();
        }
        None => {}
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(
        cli.log_file.as_deref(),
        matches!(command, Commands::Simple),
    )?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    tracing::debug!(seed = ?cli.seed, "starting");

    match command {
        Commands::Play => run_tui(App::new(rng)),
        Commands::Simple => run_simple(&mut rng),
    }
}
