//! # card-grid
//!
//! Responsive card grid packing for Rust UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! Given a container width and card-size constraints, the column packer picks
//! how many cards fit per row, how wide they are and how far apart. A
//! responsive grid keeps that answer current as the container is resized:
//! ```text
//! ResizeSource → width signal → layoutDerived → layout effect → consumer
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (CardType, LayoutConstraints, LayoutResult, LayoutChange)
//! - [`layout`] - Column packer, breakpoints, Taffy card arrangement
//! - [`observe`] - Resize sources and subscriptions
//! - [`pipeline`] - Reactive grid, mount/unmount lifecycle
//! - [`config`] - JSON grid configuration
//! - [`error`] - Configuration errors

pub mod config;
pub mod error;
pub mod layout;
pub mod observe;
pub mod pipeline;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::GridConfig;
pub use error::GridError;

pub use layout::{
    Breakpoint, Breakpoints, CardRect, GridArrangement, MAX_COLUMNS, arrange_cards,
    compute_layout, compute_layout_with,
};

pub use observe::{ManualResize, ResizeListeners, ResizeSource, Subscription, TerminalResize};

pub use pipeline::{MountHandle, ResponsiveGrid, create_layout_derived, unmount};
