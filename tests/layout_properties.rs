//! Property-based tests for the column packer
//!
//! Uses proptest to check the layout invariants over arbitrary container
//! widths and well-formed constraints.

use card_grid::{CardType, LayoutConstraints, compute_layout};
use proptest::prelude::*;

/// Slack for float rounding when summing a row.
const ROW_TOLERANCE: f32 = 0.05;

// ============================================================================
// Strategy Generators
// ============================================================================

fn card_type_strategy() -> impl Strategy<Value = CardType> {
    prop_oneof![
        Just(CardType::Horizontal),
        Just(CardType::Vertical),
        Just(CardType::Mixed),
    ]
}

/// Constraints that pass validation
fn constraints_strategy() -> impl Strategy<Value = LayoutConstraints> {
    (
        card_type_strategy(),
        50.0f32..600.0,
        prop::option::of(0.0f32..400.0),
        0.0f32..48.0,
        0.0f32..48.0,
    )
        .prop_map(|(card_type, min, extra_max, gap, extra_gap)| LayoutConstraints {
            card_type,
            min_card_width: min,
            max_card_width: extra_max.map(|extra| min + extra),
            preferred_gap: gap,
            max_gap: gap + extra_gap,
        })
}

fn width_strategy() -> impl Strategy<Value = f32> {
    0.0f32..4000.0
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every layout has at least one column
    #[test]
    fn always_at_least_one_column(c in constraints_strategy(), w in width_strategy()) {
        let layout = compute_layout(w, &c);
        prop_assert!(layout.columns >= 1);
        prop_assert!(layout.gap >= 0.0);
        prop_assert!(layout.card_width > 0.0);
    }

    /// Cards stay within bounds and the row fits whenever one card fits
    #[test]
    fn fitting_layout_respects_bounds(c in constraints_strategy(), w in width_strategy()) {
        prop_assume!(w >= c.min_card_width);
        let layout = compute_layout(w, &c);

        prop_assert!(layout.card_width >= c.min_card_width - ROW_TOLERANCE);
        if let Some(max) = c.max_card_width {
            prop_assert!(layout.card_width <= max + ROW_TOLERANCE);
        }
        prop_assert!(layout.row_width() <= w + ROW_TOLERANCE,
            "row {} exceeds container {}", layout.row_width(), w);
    }

    /// Gaps between columns stay between the preferred and maximum gap
    #[test]
    fn gap_is_clamped(c in constraints_strategy(), w in width_strategy()) {
        let layout = compute_layout(w, &c);
        if layout.columns > 1 {
            prop_assert!(layout.gap >= c.preferred_gap);
            prop_assert!(layout.gap <= c.max_gap);
        } else {
            prop_assert_eq!(layout.gap, c.preferred_gap);
        }
    }

    /// A container narrower than one card gets one overflowing card
    #[test]
    fn narrow_container_overflows(c in constraints_strategy(), fraction in 0.0f32..0.99) {
        let w = c.min_card_width * fraction;
        let layout = compute_layout(w, &c);
        prop_assert_eq!(layout.columns, 1);
        prop_assert_eq!(layout.card_width, c.min_card_width);
        prop_assert_eq!(layout.gap, c.preferred_gap);
    }

    /// Same inputs, bit-identical output
    #[test]
    fn layout_is_idempotent(c in constraints_strategy(), w in width_strategy()) {
        let a = compute_layout(w, &c);
        let b = compute_layout(w, &c);
        prop_assert_eq!(a.columns, b.columns);
        prop_assert_eq!(a.gap.to_bits(), b.gap.to_bits());
        prop_assert_eq!(a.card_width.to_bits(), b.card_width.to_bits());
    }

    /// Widening the container never removes a column
    #[test]
    fn columns_non_decreasing_in_width(
        c in constraints_strategy(),
        w in width_strategy(),
        grow in 0.0f32..2000.0,
    ) {
        let narrow = compute_layout(w, &c);
        let wide = compute_layout(w + grow, &c);
        prop_assert!(narrow.columns <= wide.columns,
            "{} cols at {} but {} cols at {}", narrow.columns, w, wide.columns, w + grow);
    }
}
