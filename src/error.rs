//! Error types for card-grid

use thiserror::Error;

/// Errors surfaced when a grid is configured.
///
/// Layout computation itself never fails; malformed constraints that slip
/// past validation degrade to a single column instead.
#[derive(Error, Debug)]
pub enum GridError {
    /// Minimum card width is zero, negative or not finite
    #[error("minimum card width must be a positive number, got {0}")]
    InvalidMinWidth(f32),

    /// Maximum card width is smaller than the minimum
    #[error("maximum card width {max} is below minimum card width {min}")]
    MaxBelowMin { min: f32, max: f32 },

    /// Preferred gap is negative or not finite
    #[error("preferred gap must be a non-negative number, got {0}")]
    InvalidGap(f32),

    /// Maximum gap is smaller than the preferred gap
    #[error("maximum gap {max} is below preferred gap {preferred}")]
    MaxGapBelowPreferred { preferred: f32, max: f32 },

    /// Grid configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Card arrangement failed inside Taffy
    #[error("Layout error: {0}")]
    Layout(#[from] taffy::TaffyError),

    /// Terminal query failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
