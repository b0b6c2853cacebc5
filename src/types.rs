//! Core types for card-grid.
//!
//! These types flow through the reactive pipeline: constraints go in,
//! the container width changes, and a fresh `LayoutResult` comes out.

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Tolerance used when checking that a layout fits its container.
pub const EPSILON: f32 = 0.01;

// =============================================================================
// Card Type
// =============================================================================

/// Shape of the cards laid out in a grid.
///
/// Determines the column caps applied at each breakpoint and the default
/// aspect ratio used when arranging cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    /// Wide cards (image beside text).
    Horizontal,
    /// Tall cards (image above text).
    #[default]
    Vertical,
    /// A mix of both shapes in the same grid.
    Mixed,
}

impl CardType {
    /// Default width / height ratio of a card of this type.
    pub const fn aspect_ratio(self) -> f32 {
        match self {
            CardType::Horizontal => 2.0,
            CardType::Vertical => 0.75,
            CardType::Mixed => 1.0,
        }
    }

    /// Short label for display.
    pub const fn label(self) -> &'static str {
        match self {
            CardType::Horizontal => "horizontal",
            CardType::Vertical => "vertical",
            CardType::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Layout Constraints
// =============================================================================

/// Size bounds for the cards of one grid.
///
/// Supplied once per grid and never mutated while the grid is mounted.
/// `compute_layout` tolerates any values here; use [`LayoutConstraints::validate`]
/// (or construct a `ResponsiveGrid`, which calls it) to reject bad ones up front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConstraints {
    pub card_type: CardType,
    pub min_card_width: f32,
    /// `None` or `+inf` means cards may grow without bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_card_width: Option<f32>,
    pub preferred_gap: f32,
    pub max_gap: f32,
}

impl LayoutConstraints {
    /// Create validated constraints.
    pub fn new(
        card_type: CardType,
        min_card_width: f32,
        max_card_width: Option<f32>,
        preferred_gap: f32,
        max_gap: f32,
    ) -> Result<Self, GridError> {
        let constraints = Self {
            card_type,
            min_card_width,
            max_card_width,
            preferred_gap,
            max_gap,
        };
        constraints.validate()?;
        Ok(constraints)
    }

    /// Preset constraints for a card type.
    pub const fn preset(card_type: CardType) -> Self {
        match card_type {
            CardType::Horizontal => Self {
                card_type,
                min_card_width: 320.0,
                max_card_width: Some(560.0),
                preferred_gap: 16.0,
                max_gap: 32.0,
            },
            CardType::Vertical => Self {
                card_type,
                min_card_width: 220.0,
                max_card_width: Some(320.0),
                preferred_gap: 16.0,
                max_gap: 24.0,
            },
            CardType::Mixed => Self {
                card_type,
                min_card_width: 260.0,
                max_card_width: Some(420.0),
                preferred_gap: 16.0,
                max_gap: 28.0,
            },
        }
    }

    /// Check the constraints describe at least one possible layout.
    pub fn validate(&self) -> Result<(), GridError> {
        if !self.min_card_width.is_finite() || self.min_card_width <= 0.0 {
            return Err(GridError::InvalidMinWidth(self.min_card_width));
        }
        if let Some(max) = self.max_card_width {
            if max.is_nan() || max < self.min_card_width {
                return Err(GridError::MaxBelowMin {
                    min: self.min_card_width,
                    max,
                });
            }
        }
        if !self.preferred_gap.is_finite() || self.preferred_gap < 0.0 {
            return Err(GridError::InvalidGap(self.preferred_gap));
        }
        if !self.max_gap.is_finite() || self.max_gap < self.preferred_gap {
            return Err(GridError::MaxGapBelowPreferred {
                preferred: self.preferred_gap,
                max: self.max_gap,
            });
        }
        Ok(())
    }

    /// Whether the packer can honor these constraints at all.
    ///
    /// Looser than [`validate`](Self::validate): a `max_gap` below the
    /// preferred gap is tolerated, the preferred gap wins.
    pub(crate) fn is_satisfiable(&self) -> bool {
        self.min_card_width.is_finite()
            && self.min_card_width > 0.0
            && self.preferred_gap.is_finite()
            && self.preferred_gap >= 0.0
            && self
                .max_card_width
                .is_none_or(|max| !max.is_nan() && max >= self.min_card_width)
    }
}

impl Default for LayoutConstraints {
    fn default() -> Self {
        Self::preset(CardType::default())
    }
}

// =============================================================================
// Layout Result
// =============================================================================

/// Output of the column packer.
///
/// Always replaced wholesale, never patched in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub columns: u32,
    pub gap: f32,
    pub card_width: f32,
}

impl LayoutResult {
    /// Width taken by one row of `columns` cards and the gaps between them.
    pub fn row_width(&self) -> f32 {
        let cols = self.columns as f32;
        cols * self.card_width + (cols - 1.0).max(0.0) * self.gap
    }

    /// Which fields differ from `previous`.
    pub fn diff(&self, previous: &LayoutResult) -> LayoutChange {
        let mut change = LayoutChange::empty();
        if self.columns != previous.columns {
            change |= LayoutChange::COLUMNS;
        }
        if self.gap != previous.gap {
            change |= LayoutChange::GAP;
        }
        if self.card_width != previous.card_width {
            change |= LayoutChange::CARD_WIDTH;
        }
        change
    }
}

// =============================================================================
// Layout Change (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Fields that changed between two successive layouts.
    ///
    /// Lets the rendering side skip work: a pure `GAP` change needs no
    /// re-flow of card contents, a `COLUMNS` change does.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LayoutChange: u8 {
        const COLUMNS = 1 << 0;
        const GAP = 1 << 1;
        const CARD_WIDTH = 1 << 2;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for card_type in [CardType::Horizontal, CardType::Vertical, CardType::Mixed] {
            let c = LayoutConstraints::preset(card_type);
            assert!(c.validate().is_ok(), "{card_type} preset should validate");
            assert_eq!(c.card_type, card_type);
        }
    }

    #[test]
    fn test_validate_rejects_bad_widths() {
        let err = LayoutConstraints::new(CardType::Vertical, 0.0, None, 8.0, 8.0);
        assert!(matches!(err, Err(GridError::InvalidMinWidth(_))));

        let err = LayoutConstraints::new(CardType::Vertical, 200.0, Some(100.0), 8.0, 8.0);
        assert!(matches!(err, Err(GridError::MaxBelowMin { .. })));

        let err = LayoutConstraints::new(CardType::Vertical, 200.0, None, -1.0, 8.0);
        assert!(matches!(err, Err(GridError::InvalidGap(_))));

        let err = LayoutConstraints::new(CardType::Vertical, 200.0, None, 16.0, 8.0);
        assert!(matches!(err, Err(GridError::MaxGapBelowPreferred { .. })));
    }

    #[test]
    fn test_infinite_max_width_is_unbounded() {
        let c = LayoutConstraints::new(
            CardType::Vertical,
            100.0,
            Some(f32::INFINITY),
            10.0,
            10.0,
        );
        assert!(c.is_ok());
        assert!(c.unwrap().is_satisfiable());

        let err = LayoutConstraints::new(
            CardType::Vertical,
            100.0,
            Some(f32::NAN),
            10.0,
            10.0,
        );
        assert!(matches!(err, Err(GridError::MaxBelowMin { .. })));
    }

    #[test]
    fn test_satisfiable_tolerates_small_max_gap() {
        let c = LayoutConstraints {
            card_type: CardType::Mixed,
            min_card_width: 100.0,
            max_card_width: None,
            preferred_gap: 16.0,
            max_gap: 4.0,
        };
        assert!(c.validate().is_err());
        assert!(c.is_satisfiable());
    }

    #[test]
    fn test_layout_diff() {
        let a = LayoutResult {
            columns: 3,
            gap: 16.0,
            card_width: 300.0,
        };
        let b = LayoutResult {
            columns: 3,
            gap: 20.0,
            card_width: 300.0,
        };
        let c = LayoutResult {
            columns: 4,
            gap: 16.0,
            card_width: 220.0,
        };

        assert_eq!(a.diff(&a), LayoutChange::empty());
        assert_eq!(b.diff(&a), LayoutChange::GAP);
        assert_eq!(c.diff(&a), LayoutChange::COLUMNS | LayoutChange::CARD_WIDTH);
    }

    #[test]
    fn test_row_width() {
        let r = LayoutResult {
            columns: 3,
            gap: 16.0,
            card_width: 300.0,
        };
        assert_eq!(r.row_width(), 932.0);

        let single = LayoutResult {
            columns: 1,
            gap: 16.0,
            card_width: 300.0,
        };
        assert_eq!(single.row_width(), 300.0);
    }

    #[test]
    fn test_constraints_serde_names() {
        let json = r#"{
            "cardType": "horizontal",
            "minCardWidth": 400,
            "preferredGap": 12,
            "maxGap": 24
        }"#;
        let c: LayoutConstraints = serde_json::from_str(json).unwrap();
        assert_eq!(c.card_type, CardType::Horizontal);
        assert_eq!(c.min_card_width, 400.0);
        assert_eq!(c.max_card_width, None);
    }
}
