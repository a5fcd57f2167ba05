//! Input adapter
//!
//! Translates raw key input into the three engine events. Anything that is not
//! a single letter, Backspace or Enter is dropped here and never reaches the
//! engine.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

/// Events the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A letter, always lowercase
    Letter(char),
    Backspace,
    Submit,
}

impl InputEvent {
    /// Map a terminal key event
    ///
    /// Only key presses count; release and repeat events are dropped, as are
    /// keys held with Control or Alt.
    #[must_use]
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        match key.code {
            KeyCode::Char(c) => Self::from_char(c),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Enter => Some(Self::Submit),
            other => {
                debug!(key = ?other, "ignoring key");
                None
            }
        }
    }

    /// Map a raw key name such as `"a"`, `"Enter"` or `"Backspace"`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::input::InputEvent;
    ///
    /// assert_eq!(InputEvent::from_raw("Q"), Some(InputEvent::Letter('q')));
    /// assert_eq!(InputEvent::from_raw("Enter"), Some(InputEvent::Submit));
    /// assert_eq!(InputEvent::from_raw("Shift"), None);
    /// assert_eq!(InputEvent::from_raw("7"), None);
    /// ```
    #[must_use]
    pub fn from_raw(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Submit),
            "Backspace" => Some(Self::Backspace),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => {
                        debug!(key, "ignoring key");
                        None
                    }
                }
            }
        }
    }

    fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self::Letter(c.to_ascii_lowercase()))
        } else {
            debug!(key = %c, "ignoring non-letter key");
            None
        }
    }
}
