//! Responsive grid and its mount lifecycle.
//!
//! A `ResponsiveGrid` owns the container width signal and the layout derived.
//! Mounting it on a [`ResizeSource`] wires the two ends together:
//!
//! ```text
//! ResizeSource ──observe──→ width signal → layoutDerived → layout effect → on_layout
//! ```
//!
//! # Example
//!
//! ```ignore
//! use card_grid::{CardType, LayoutConstraints, ManualResize, ResponsiveGrid};
//!
//! let grid = ResponsiveGrid::new(LayoutConstraints::preset(CardType::Vertical))?;
//! let source = ManualResize::with_width(1024.0);
//!
//! let handle = grid.mount(&source, |layout, _change| {
//!     println!("{} columns", layout.columns);
//! });
//!
//! source.resize(1440.0);
//! handle.unmount();
//! ```

use spark_signals::{Derived, Signal, effect, flush_sync, signal};
use tracing::{debug, info};

use crate::config::GridConfig;
use crate::error::GridError;
use crate::layout::{Breakpoints, GridArrangement, arrange_cards};
use crate::observe::{ResizeSource, Subscription};
use crate::types::{LayoutChange, LayoutConstraints, LayoutResult};

use super::layout_derived::{create_layout_derived, sanitize_width};

// =============================================================================
// Responsive Grid
// =============================================================================

/// One layout instance: fixed constraints, a reactive container width and
/// the layout derived from it.
pub struct ResponsiveGrid {
    constraints: LayoutConstraints,
    breakpoints: Breakpoints,
    width: Signal<f32>,
    layout: Derived<LayoutResult>,
}

impl ResponsiveGrid {
    /// Create a grid with the default breakpoints.
    ///
    /// Fails if the constraints cannot describe any layout.
    pub fn new(constraints: LayoutConstraints) -> Result<Self, GridError> {
        Self::from_config(GridConfig {
            constraints,
            breakpoints: Breakpoints::DEFAULT,
        })
    }

    /// Create a grid from a full configuration.
    pub fn from_config(config: GridConfig) -> Result<Self, GridError> {
        config.constraints.validate()?;
        let breakpoints = config.breakpoints.sanitized();

        let width = signal(0.0f32);
        let layout = create_layout_derived(width.clone(), config.constraints, breakpoints);

        Ok(Self {
            constraints: config.constraints,
            breakpoints,
            width,
            layout,
        })
    }

    pub fn constraints(&self) -> &LayoutConstraints {
        &self.constraints
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Current container width (0 until measured).
    pub fn container_width(&self) -> f32 {
        self.width.get()
    }

    /// Record a new container width and flush dependent effects.
    pub fn set_container_width(&self, width: f32) {
        store_width(&self.width, width);
    }

    /// Layout for the current container width.
    pub fn layout(&self) -> LayoutResult {
        self.layout.get()
    }

    /// Card rectangles for `count` cards at the current layout.
    pub fn arrange(&self, count: usize) -> Result<GridArrangement, GridError> {
        arrange_cards(&self.layout(), count, self.constraints.card_type.aspect_ratio())
    }

    /// Attach the grid to a resize source.
    ///
    /// The source is measured eagerly, then `on_layout` is called once with
    /// the initial layout (`LayoutChange::all()`) and again after every
    /// resize that changes the layout. The subscription lives until the
    /// returned handle is unmounted or dropped.
    pub fn mount<S, F>(&self, source: &S, on_layout: F) -> MountHandle
    where
        S: ResizeSource,
        F: FnMut(LayoutResult, LayoutChange) + 'static,
    {
        if let Some(width) = source.measure() {
            store_width(&self.width, width);
        }

        let layout = self.layout.clone();
        let mut on_layout = on_layout;
        let mut previous: Option<LayoutResult> = None;

        // Create the ONE layout effect
        let stop_fn = effect(move || {
            // Read from derived (creates dependency)
            let current = layout.get();

            let change = match previous {
                Some(prev) => current.diff(&prev),
                None => LayoutChange::all(),
            };
            if change.is_empty() {
                return;
            }

            previous = Some(current);
            on_layout(current, change);
        });
        flush_sync();

        let width = self.width.clone();
        let subscription = source.observe(move |w| store_width(&width, w));

        info!(
            card_type = %self.constraints.card_type,
            container_width = self.width.get(),
            "grid mounted"
        );

        MountHandle {
            stop_effect: Some(Box::new(stop_fn)),
            subscription: Some(subscription),
        }
    }
}

fn store_width(width: &Signal<f32>, raw: f32) {
    let sanitized = sanitize_width(raw);
    debug!(raw, sanitized, "container width updated");
    width.set(sanitized);
    flush_sync();
}

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`ResponsiveGrid::mount`].
///
/// Holds:
/// - The resize subscription
/// - The layout effect stop function
///
/// Both are released on `unmount()` or drop, subscription first so no
/// resize can reach a stopped effect.
pub struct MountHandle {
    stop_effect: Option<Box<dyn FnOnce()>>,
    subscription: Option<Subscription>,
}

impl MountHandle {
    /// Unsubscribe from the source and stop the layout effect.
    pub fn unmount(mut self) {
        self.release();
        info!("grid unmounted");
    }

    /// Whether the grid is still receiving resizes.
    pub fn is_mounted(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(Subscription::is_active)
    }

    fn release(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }

        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.release();
    }
}

/// Unmount and clean up.
pub fn unmount(handle: MountHandle) {
    handle.unmount();
}

// =============================================================================
// Tests
// =============================================================================
