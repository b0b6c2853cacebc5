//! In-memory resize source.
//!
//! Used by embedders that measure the container themselves (a host UI
//! toolkit, a browser bridge) and by tests.

use std::cell::Cell;

use super::{ResizeListeners, ResizeSource};

/// Resize source driven by explicit `resize` calls.
#[derive(Default)]
pub struct ManualResize {
    width: Cell<Option<f32>>,
    listeners: ResizeListeners,
}

impl ManualResize {
    /// Source with no measurement yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Source that already knows its width.
    pub fn with_width(width: f32) -> Self {
        let source = Self::default();
        source.width.set(Some(width));
        source
    }

    /// Record a new width and notify listeners.
    pub fn resize(&self, width: f32) {
        self.width.set(Some(width));
        self.listeners.emit(width);
    }
}

impl ResizeSource for ManualResize {
    fn measure(&self) -> Option<f32> {
        self.width.get()
    }

    fn listeners(&self) -> &ResizeListeners {
        &self.listeners
    }
}
