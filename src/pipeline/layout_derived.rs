//! Layout Derived - Reactive layout computation.
//!
//! Creates a Derived that recomputes the grid layout whenever the container
//! width signal changes. Constraints and breakpoints are captured by value:
//! they are fixed for the lifetime of a grid.

use spark_signals::{Derived, Signal, derived};

use crate::layout::{Breakpoints, compute_layout_with};
use crate::types::{LayoutConstraints, LayoutResult};

/// Clamp a raw measurement to a usable container width.
///
/// Negative, NaN and infinite widths count as "not measured" (0).
pub fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}

/// Create the layout derived.
///
/// Returns a Derived that runs the column packer from scratch each time
/// `width` changes.
pub fn create_layout_derived(
    width: Signal<f32>,
    constraints: LayoutConstraints,
    breakpoints: Breakpoints,
) -> Derived<LayoutResult> {
    derived(move || {
        // Read container width (creates reactive dependency)
        let container_width = width.get();

        compute_layout_with(container_width, &constraints, &breakpoints)
    })
}

// =============================================================================
// Tests
// =============================================================================
