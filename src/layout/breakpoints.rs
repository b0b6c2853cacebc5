//! Responsive breakpoints.
//!
//! A container width falls into one of five tiers. Each tier caps how many
//! columns a card type may use; the caps are applied after the column search
//! and can only lower the column count.

use serde::{Deserialize, Serialize};

use crate::types::CardType;

/// Width tiers, ordered from narrowest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// All breakpoints in ascending order.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Short label for display.
    pub const fn label(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    /// Most columns a card type may use at this tier.
    pub const fn max_columns(self, card_type: CardType) -> u32 {
        match (self, card_type) {
            (Breakpoint::Xs, _) => 1,
            (Breakpoint::Sm, CardType::Horizontal) => 1,
            (Breakpoint::Sm, _) => 2,
            (Breakpoint::Md, CardType::Horizontal) => 2,
            (Breakpoint::Md, CardType::Vertical) => 3,
            (Breakpoint::Md, CardType::Mixed) => 2,
            (Breakpoint::Lg, CardType::Horizontal) => 2,
            (Breakpoint::Lg, CardType::Vertical) => 4,
            (Breakpoint::Lg, CardType::Mixed) => 3,
            (Breakpoint::Xl, CardType::Horizontal) => 3,
            (Breakpoint::Xl, CardType::Vertical) => 5,
            (Breakpoint::Xl, CardType::Mixed) => 4,
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Minimum container width of each tier above `Xs`, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
}

impl Breakpoints {
    /// Default thresholds: 640 / 768 / 1024 / 1280.
    pub const DEFAULT: Self = Self {
        sm: 640.0,
        md: 768.0,
        lg: 1024.0,
        xl: 1280.0,
    };

    /// Create breakpoints, raising any threshold below its predecessor.
    pub fn new(sm: f32, md: f32, lg: f32, xl: f32) -> Self {
        Self { sm, md, lg, xl }.sanitized()
    }

    /// Copy with thresholds forced to be non-decreasing.
    pub fn sanitized(self) -> Self {
        let sm = self.sm.max(0.0);
        let md = self.md.max(sm);
        let lg = self.lg.max(md);
        let xl = self.xl.max(lg);
        Self { sm, md, lg, xl }
    }

    /// Classify a width into its tier.
    pub fn classify(&self, width: f32) -> Breakpoint {
        if width >= self.xl {
            Breakpoint::Xl
        } else if width >= self.lg {
            Breakpoint::Lg
        } else if width >= self.md {
            Breakpoint::Md
        } else if width >= self.sm {
            Breakpoint::Sm
        } else {
            Breakpoint::Xs
        }
    }

    /// Column cap for a card type at `width`.
    pub fn column_cap(&self, width: f32, card_type: CardType) -> u32 {
        self.classify(width).max_columns(card_type)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// =============================================================================
// Tests
// =============================================================================
