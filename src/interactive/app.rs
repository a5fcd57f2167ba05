//! TUI application state and logic

use crate::engine::{GameEngine, GameObserver, GameStatus, Statistics, TracingObserver};
use crate::input::InputEvent;
use crate::output::share_summary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Application state
pub struct App<O: GameObserver + Clone = TracingObserver> {
    pub engine: GameEngine<O>,
    pub stats: Statistics,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    rng: StdRng,
    observer: O,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App<TracingObserver> {
    #[must_use]
    pub fn new(rng: StdRng) -> Self {
        Self::with_observer(rng, TracingObserver)
    }
}

impl<O: GameObserver + Clone> App<O> {
    #[must_use]
    pub fn with_observer(mut rng: StdRng, observer: O) -> Self {
        let engine = GameEngine::with_observer(&mut rng, observer.clone());

        Self {
            engine,
            stats: Statistics::default(),
            messages: vec![Message {
                text: "Guess the 5-letter word in 6 tries. Enter submits a row.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            rng,
            observer,
        }
    }

    pub fn new_game(&mut self) {
        self.engine = GameEngine::with_observer(&mut self.rng, self.observer.clone());
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Handle one key press
    ///
    /// Quit and new-game keys are handled here; everything else goes through
    /// the input adapter to the engine.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if self.engine.status().is_over() {
            match key.code {
                KeyCode::Char('n' | 'N') => self.new_game(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {
                    // Game over: ignore other keys
                }
            }
            return;
        }

        if let Some(event) = InputEvent::from_key(key) {
            self.handle_input(event);
        }
    }

    fn handle_input(&mut self, event: InputEvent) {
        let row = self.engine.current_row();
        let changed = self.engine.apply(event);

        if event != InputEvent::Submit {
            return;
        }
        if !changed {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }

        match self.engine.status() {
            GameStatus::Won => {
                self.stats.record(self.engine.state());
                let celebration = match row + 1 {
                    1 => "🎯 Genius! First try!",
                    2 => "🔥 Magnificent!",
                    3 => "✨ Impressive!",
                    4 => "👏 Splendid!",
                    5 => "🎉 Great!",
                    _ => "😅 Phew!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.finish_game();
            }
            GameStatus::Lost => {
                self.stats.record(self.engine.state());
                let text = format!(
                    "The word was {}",
                    self.engine.target().text().to_uppercase()
                );
                self.add_message(&text, MessageStyle::Error);
                self.finish_game();
            }
            GameStatus::Playing => {}
        }
    }

    fn finish_game(&mut self) {
        if let Some(summary) = share_summary(self.engine.state()) {
            info!(%summary, "game finished");
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
