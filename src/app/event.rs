//! Event handling for the TUI

use anyhow::{Context, Result};
use ratatui::crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};
use std::time::Duration;

/// Application events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Nothing arrived within the tick
    Tick,
    /// Keyboard input
    Key(KeyEvent),
    /// Mouse input
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
}

impl Event {
    /// Translate a raw terminal event
    ///
    /// Key releases and focus/paste events collapse to [`Event::Tick`].
    #[must_use]
    pub fn from_crossterm(raw: CrosstermEvent) -> Self {
        match raw {
            CrosstermEvent::Key(key) if matches!(key.kind, KeyEventKind::Press) => Self::Key(key),
            CrosstermEvent::Mouse(mouse) => Self::Mouse(mouse),
            CrosstermEvent::Resize(w, h) => Self::Resize(w, h),
            _ => Self::Tick,
        }
    }
}

/// Handler that polls for terminal events
#[derive(Debug, Clone, Copy)]
pub struct Handler {
    tick_rate: Duration,
}

impl Handler {
    /// Create a new event handler with the given tick rate
    #[must_use]
    pub const fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Poll for the next event
    ///
    /// # Errors
    ///
    /// Returns an error if polling fails
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick_rate).context("Failed to poll terminal events")? {
            let raw = event::read().context("Failed to read terminal event")?;
            Ok(Event::from_crossterm(raw))
        } else {
            Ok(Event::Tick)
        }
    }

    /// Get the tick rate
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        self.tick_rate
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}
