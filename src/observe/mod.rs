//! Resize Observation
//!
//! Callback-based "container size changed" notifications. The column packer
//! never talks to a platform directly; whatever measures the container
//! implements [`ResizeSource`] and pushes widths through [`ResizeListeners`].
//!
//! # Lifecycle
//!
//! ```text
//! source.observe(cb) → Subscription ── cancel() / drop ──→ listener removed
//! ```
//!
//! Listeners are single-threaded (`Rc`), matching the reactive pipeline.

mod manual;
mod terminal;

pub use manual::ManualResize;
pub use terminal::TerminalResize;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

// =============================================================================
// ResizeSource
// =============================================================================

/// Something that can report the width of a container and notify when it changes.
pub trait ResizeSource {
    /// Current width, if the container has been measured.
    fn measure(&self) -> Option<f32>;

    /// Registry that receives this source's width changes.
    fn listeners(&self) -> &ResizeListeners;

    /// Register a callback for width changes.
    ///
    /// The callback stays registered until the returned [`Subscription`]
    /// is cancelled or dropped.
    fn observe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(f32) + 'static,
        Self: Sized,
    {
        self.listeners().subscribe(callback)
    }
}

// =============================================================================
// Listener Registry
// =============================================================================

type Listener = Rc<RefCell<dyn FnMut(f32)>>;

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Registry of width callbacks.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct ResizeListeners {
    table: Rc<RefCell<ListenerTable>>,
}

impl ResizeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a callback. It is removed when the returned subscription goes away.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(f32) + 'static,
    {
        let listener: Listener = Rc::new(RefCell::new(callback));
        let mut table = self.table.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        table.entries.push((id, listener));

        Subscription {
            id,
            table: Rc::downgrade(&self.table),
        }
    }

    /// Deliver `width` to every subscribed callback, in subscription order.
    ///
    /// Works on a snapshot, so callbacks may subscribe or cancel while the
    /// emit is in progress. A callback cancelled mid-emit is not called.
    pub fn emit(&self, width: f32) {
        let snapshot: Vec<(u64, Listener)> = self.table.borrow().entries.clone();
        debug!(width, listeners = snapshot.len(), "resize emitted");

        for (id, listener) in snapshot {
            if !self.contains(id) {
                continue;
            }
            match listener.try_borrow_mut() {
                Ok(mut callback) => (*callback)(width),
                Err(_) => warn!(id, "resize listener re-entered, skipping nested call"),
            }
        }
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.table.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: u64) -> bool {
        self.table.borrow().entries.iter().any(|(i, _)| *i == id)
    }
}

// =============================================================================
// Subscription
// =============================================================================

/// Live registration of a resize callback.
///
/// Dropping it unsubscribes. Holds only a weak reference to the registry,
/// so it may safely outlive its source.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    table: Weak<RefCell<ListenerTable>>,
}

impl Subscription {
    /// Unsubscribe now.
    pub fn cancel(self) {
        // Drop does the work
    }

    /// Whether the callback is still registered.
    pub fn is_active(&self) -> bool {
        match self.table.upgrade() {
            Some(table) => {
                let active = table.borrow().entries.iter().any(|(i, _)| *i == self.id);
                active
            }
            None => false,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            table.borrow_mut().entries.retain(|(i, _)| *i != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
