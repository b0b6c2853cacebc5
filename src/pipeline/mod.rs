//! Reactive Pipeline
//!
//! Connects a resize source to a layout consumer.
//!
//! # Pipeline Architecture
//!
//! ```text
//! ResizeSource → width signal → layoutDerived → layout effect → on_layout
//! ```
//!
//! ## Data Flow
//!
//! 1. **width signal** - Written only by the resize subscription (and once at mount)
//! 2. **layoutDerived** - Pure: runs the column packer on the current width
//! 3. **layout effect** - Monitors layoutDerived, hands changed layouts to the consumer
//!
//! ## Key Design Principles
//!
//! - **Pure Deriveds**: layoutDerived never mutates anything
//! - **Side Effects in Effect**: Only the layout effect calls out to the consumer
//! - **Scoped Subscriptions**: Every mount returns a handle that releases the
//!   subscription and the effect

pub mod layout_derived;
pub mod mount;

// Re-exports
pub use layout_derived::{create_layout_derived, sanitize_width};
pub use mount::{MountHandle, ResponsiveGrid, unmount};
