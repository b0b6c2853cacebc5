//! Terminal resize source.
//!
//! Measures the terminal with crossterm and turns `Event::Resize` into
//! width notifications. Terminal widths are in columns; `cell_width`
//! scales them into the units the grid constraints use.

use std::time::Duration;

use crossterm::event::{self, Event};
use tracing::debug;

use crate::error::GridError;

use super::{ResizeListeners, ResizeSource};

/// Resize source backed by the controlling terminal.
pub struct TerminalResize {
    cell_width: f32,
    listeners: ResizeListeners,
}

impl TerminalResize {
    /// One width unit per terminal column.
    pub fn new() -> Self {
        Self::with_cell_width(1.0)
    }

    /// Scale terminal columns by `cell_width` (e.g. pixels per cell).
    pub fn with_cell_width(cell_width: f32) -> Self {
        Self {
            cell_width,
            listeners: ResizeListeners::new(),
        }
    }

    /// Width for a terminal `cols` columns wide.
    pub fn width_for_columns(&self, cols: u16) -> f32 {
        cols as f32 * self.cell_width
    }

    /// Wait up to `timeout` for terminal events and deliver any resizes.
    ///
    /// Once one event arrives, everything already queued is drained without
    /// waiting. Events other than resizes are returned to the caller.
    pub fn poll(&self, timeout: Duration) -> Result<Vec<Event>, GridError> {
        let mut others = Vec::new();
        let mut wait = timeout;

        while event::poll(wait)? {
            if let Some(other) = self.handle_event(event::read()?) {
                others.push(other);
            }
            wait = Duration::ZERO;
        }

        Ok(others)
    }

    /// Deliver `event` if it is a resize; hand anything else back.
    pub fn handle_event(&self, event: Event) -> Option<Event> {
        match event {
            Event::Resize(cols, rows) => {
                debug!(cols, rows, "terminal resized");
                self.listeners.emit(self.width_for_columns(cols));
                None
            }
            other => Some(other),
        }
    }
}

impl Default for TerminalResize {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizeSource for TerminalResize {
    fn measure(&self) -> Option<f32> {
        crossterm::terminal::size()
            .ok()
            .map(|(cols, _)| self.width_for_columns(cols))
    }

    fn listeners(&self) -> &ResizeListeners {
        &self.listeners
    }
}
