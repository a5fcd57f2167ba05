//! Diagnostic observers
//!
//! The engine reports notable events to an observer. Observers see events
//! after the state has been replaced and cannot influence it.

use crate::core::{CellStatus, WORD_LEN};
use tracing::{debug, info};

/// Notable engine events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A target word was drawn from the bank
    TargetChosen { index: usize },
    /// A letter could not be placed (row full or game over)
    LetterRejected { letter: char },
    /// Submit was pressed on an incomplete row
    IncompleteSubmit { row: usize },
    /// A complete row was scored
    RowSubmitted {
        row: usize,
        guess: String,
        statuses: [CellStatus; WORD_LEN],
    },
    Won { attempts: usize },
    Lost,
}

/// Receiver of engine events
pub trait GameObserver {
    fn notify(&self, event: &GameEvent);
}

/// Forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn notify(&self, event: &GameEvent) {
        match event {
            GameEvent::TargetChosen { index } => debug!(index, "target word chosen"),
            GameEvent::LetterRejected { letter } => debug!(%letter, "letter ignored"),
            GameEvent::IncompleteSubmit { row } => debug!(row, "submit ignored, row incomplete"),
            GameEvent::RowSubmitted {
                row,
                guess,
                statuses,
            } => debug!(
                row,
                %guess,
                classes = ?statuses.map(CellStatus::class_name),
                "row scored"
            ),
            GameEvent::Won { attempts } => info!(attempts, "game won"),
            GameEvent::Lost => info!("game lost"),
        }
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {
    fn notify(&self, _event: &GameEvent) {}
}

impl<O: GameObserver + ?Sized> GameObserver for &O {
    fn notify(&self, event: &GameEvent) {
        (**self).notify(event);
    }
}

/// Keeps every event in memory, in order
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingObserver {
    events: std::cell::RefCell<Vec<GameEvent>>,
}

#[cfg(test)]
impl RecordingObserver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Take the recorded events, leaving the log empty
    pub(crate) fn take(&self) -> Vec<GameEvent> {
        self.events.take()
    }
}

#[cfg(test)]
impl GameObserver for RecordingObserver {
    fn notify(&self, event: &GameEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
