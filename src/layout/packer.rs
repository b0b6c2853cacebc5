//! Column Packer - container width to column count, gap and card width.
//!
//! Searches column counts from 1 up to [`MAX_COLUMNS`], keeping the densest
//! count whose cards still reach `min_card_width`, then applies the
//! breakpoint caps. Recomputed from scratch on every resize; the search is
//! at most six iterations.

use tracing::{debug, trace, warn};

use crate::types::{LayoutConstraints, LayoutResult};

use super::breakpoints::Breakpoints;

/// Upper bound of the column search (densest supported breakpoint).
pub const MAX_COLUMNS: u32 = 6;

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Compute the grid layout for `container_width` with the default breakpoints.
pub fn compute_layout(container_width: f32, constraints: &LayoutConstraints) -> LayoutResult {
    compute_layout_with(container_width, constraints, &Breakpoints::DEFAULT)
}

/// Compute the grid layout for `container_width` with custom breakpoints.
///
/// Never fails. A zero, negative or unmeasured width, malformed constraints,
/// and containers narrower than one card all produce a single column of
/// `min_card_width` cards separated by `preferred_gap`.
pub fn compute_layout_with(
    container_width: f32,
    constraints: &LayoutConstraints,
    breakpoints: &Breakpoints,
) -> LayoutResult {
    let fallback = fallback_layout(constraints);

    if !container_width.is_finite() || container_width <= 0.0 {
        trace!(container_width, "container not measured, using fallback layout");
        return fallback;
    }

    if !constraints.is_satisfiable() {
        warn!(?constraints, "unsatisfiable layout constraints, using fallback layout");
        return fallback;
    }

    let mut best: Option<LayoutResult> = None;

    for cols in 1..=MAX_COLUMNS {
        let candidate = candidate_width(container_width, cols, constraints.preferred_gap);
        trace!(cols, candidate, "column candidate");

        // Candidate width only shrinks as columns grow
        if candidate < constraints.min_card_width {
            break;
        }

        best = Some(fit_columns(container_width, cols, constraints));
    }

    let Some(found) = best else {
        warn!(
            container_width,
            min_card_width = constraints.min_card_width,
            "container narrower than one card, cards will overflow"
        );
        return fallback;
    };

    let cap = breakpoints.column_cap(container_width, constraints.card_type);
    let result = if found.columns > cap {
        trace!(searched = found.columns, cap, "breakpoint cap applied");
        fit_columns(container_width, cap, constraints)
    } else {
        found
    };

    debug!(
        container_width,
        columns = result.columns,
        gap = result.gap,
        card_width = result.card_width,
        "layout computed"
    );

    result
}

// =============================================================================
// HELPERS
// =============================================================================

/// Single column at the minimum card width.
fn fallback_layout(constraints: &LayoutConstraints) -> LayoutResult {
    LayoutResult {
        columns: 1,
        gap: constraints.preferred_gap.max(0.0),
        card_width: constraints.min_card_width,
    }
}

/// Width of each card if `cols` cards share the container at the preferred gap.
fn candidate_width(container_width: f32, cols: u32, preferred_gap: f32) -> f32 {
    let cols = cols as f32;
    (container_width - (cols - 1.0) * preferred_gap) / cols
}

/// Layout for exactly `cols` columns.
///
/// Card width is the even share capped at `max_card_width`; whatever width
/// the cap frees up is spread over the gaps, up to `max_gap`.
fn fit_columns(container_width: f32, cols: u32, constraints: &LayoutConstraints) -> LayoutResult {
    let candidate = candidate_width(container_width, cols, constraints.preferred_gap);
    let card_width = match constraints.max_card_width {
        Some(max) => candidate.min(max),
        None => candidate,
    };

    let gap = if cols > 1 {
        let leftover = container_width - cols as f32 * card_width;
        let max_gap = constraints.max_gap.max(constraints.preferred_gap);
        (leftover / (cols - 1) as f32).clamp(constraints.preferred_gap, max_gap)
    } else {
        constraints.preferred_gap
    };

    LayoutResult {
        columns: cols,
        gap,
        card_width,
    }
}

// =============================================================================
// Tests
// =============================================================================
