//! Grid Layout Module
//!
//! Responsive column packing for card grids.
//!
//! # Architecture
//!
//! 1. [`compute_layout`] maps a container width and card constraints to a
//!    column count, gap and card width
//! 2. [`Breakpoints`] cap the column count per card type at each width tier
//! 3. [`arrange_cards`] hands the result to [Taffy](https://github.com/DioxusLabs/taffy)
//!    as a CSS grid and extracts one rectangle per card
//!
//! # Reactivity
//!
//! Everything here is pure. The pipeline module wraps `compute_layout` in a
//! derived so it re-runs when the container width signal changes.
//!
//! # Example
//!
//! ```ignore
//! use card_grid::layout::compute_layout;
//! use card_grid::{CardType, LayoutConstraints};
//!
//! let layout = compute_layout(1000.0, &LayoutConstraints::preset(CardType::Vertical));
//! assert!(layout.columns >= 1);
//! ```

mod breakpoints;
mod packer;
mod taffy_bridge;

pub use breakpoints::{Breakpoint, Breakpoints};
pub use packer::{MAX_COLUMNS, compute_layout, compute_layout_with};
pub use taffy_bridge::{CardRect, GridArrangement, arrange_cards};
