//! Grid configuration.
//!
//! A grid is configured by its card constraints plus, optionally, custom
//! breakpoints. Both deserialize from JSON:
//!
//! ```json
//! {
//!   "constraints": {
//!     "cardType": "vertical",
//!     "minCardWidth": 250,
//!     "maxCardWidth": 400,
//!     "preferredGap": 16,
//!     "maxGap": 32
//!   },
//!   "breakpoints": { "sm": 640, "md": 768, "lg": 1024, "xl": 1280 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::layout::Breakpoints;
use crate::types::{CardType, LayoutConstraints};

/// Everything needed to build a `ResponsiveGrid`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridConfig {
    pub constraints: LayoutConstraints,
    #[serde(default)]
    pub breakpoints: Breakpoints,
}

impl GridConfig {
    /// Config with the preset constraints for `card_type` and default breakpoints.
    pub fn preset(card_type: CardType) -> Self {
        Self {
            constraints: LayoutConstraints::preset(card_type),
            breakpoints: Breakpoints::DEFAULT,
        }
    }

    /// Parse and validate a JSON config.
    ///
    /// Breakpoints are sanitized to be non-decreasing; constraints must pass
    /// [`LayoutConstraints::validate`].
    pub fn from_json(json: &str) -> Result<Self, GridError> {
        let mut config: GridConfig = serde_json::from_str(json)?;
        config.constraints.validate()?;
        config.breakpoints = config.breakpoints.sanitized();
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, GridError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// =============================================================================
// Tests
// =============================================================================
