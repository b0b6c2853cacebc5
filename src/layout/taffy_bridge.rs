//! Taffy Bridge - turns a LayoutResult into card rectangles.
//!
//! Builds a Taffy CSS-grid container with one fixed track per column,
//! adds a leaf per card, runs layout computation, and extracts each card's
//! position back into a `GridArrangement`.

use taffy::style_helpers::length;
use taffy::{
    AvailableSpace, Dimension as TaffyDimension, Display, LengthPercentage, NodeId, Size, Style,
    TaffyTree,
};

use crate::error::GridError;
use crate::types::LayoutResult;

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// Position and size of one card inside the grid container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    /// Insertion order of the card.
    pub index: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl CardRect {
    /// Right edge (x + width).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (y + height).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// All card rectangles for one layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridArrangement {
    pub cards: Vec<CardRect>,
    pub content_width: f32,
    pub content_height: f32,
}

impl GridArrangement {
    /// Number of rows the cards occupy.
    pub fn rows(&self, columns: u32) -> usize {
        self.cards.len().div_ceil(columns.max(1) as usize)
    }
}

// =============================================================================
// STYLE BUILDING
// =============================================================================

/// Grid container: `columns` fixed tracks of `card_width`, uniform gap.
fn container_style(layout: &LayoutResult) -> Style {
    let columns = layout.columns.max(1) as usize;

    Style {
        display: Display::Grid,
        size: Size {
            width: TaffyDimension::Length(layout.row_width()),
            height: TaffyDimension::Auto,
        },
        gap: Size {
            width: LengthPercentage::Length(layout.gap),
            height: LengthPercentage::Length(layout.gap),
        },
        grid_template_columns: vec![length(layout.card_width); columns],
        ..Default::default()
    }
}

/// A single card of fixed size.
fn card_style(width: f32, height: f32) -> Style {
    Style {
        size: Size {
            width: TaffyDimension::Length(width),
            height: TaffyDimension::Length(height),
        },
        ..Default::default()
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Place `count` cards into the grid described by `layout`.
///
/// Card height is `card_width / aspect_ratio`; a non-positive or non-finite
/// ratio is treated as square. Cards fill rows left to right.
pub fn arrange_cards(
    layout: &LayoutResult,
    count: usize,
    aspect_ratio: f32,
) -> Result<GridArrangement, GridError> {
    if count == 0 {
        return Ok(GridArrangement::default());
    }

    let ratio = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
        aspect_ratio
    } else {
        1.0
    };
    let card_height = layout.card_width / ratio;

    let mut tree: TaffyTree<()> = TaffyTree::new();
    // Keep the packer's fractional widths; snapping is the renderer's call
    tree.disable_rounding();

    let mut card_nodes: Vec<NodeId> = Vec::with_capacity(count);
    for _ in 0..count {
        card_nodes.push(tree.new_leaf(card_style(layout.card_width, card_height))?);
    }

    let root = tree.new_with_children(container_style(layout), &card_nodes)?;

    let available = Size {
        width: AvailableSpace::Definite(layout.row_width()),
        height: AvailableSpace::MaxContent,
    };
    tree.compute_layout(root, available)?;

    // Extract results
    let mut cards = Vec::with_capacity(count);
    for (index, &node_id) in card_nodes.iter().enumerate() {
        let node_layout = tree.layout(node_id)?;
        cards.push(CardRect {
            index,
            x: node_layout.location.x,
            y: node_layout.location.y,
            width: node_layout.size.width,
            height: node_layout.size.height,
        });
    }

    let root_layout = tree.layout(root)?;

    Ok(GridArrangement {
        cards,
        content_width: root_layout.size.width,
        content_height: root_layout.size.height,
    })
}

// =============================================================================
// Tests
// =============================================================================
