//! End-to-end tests for the responsive grid.
//!
//! Drives the public API the way a host does: build a grid, mount it on a
//! resize source, resize, unmount.

use std::cell::RefCell;
use std::rc::Rc;

use card_grid::{
    CardType, EPSILON, GridConfig, LayoutChange, LayoutConstraints, LayoutResult, ManualResize,
    ResizeSource, ResponsiveGrid, compute_layout,
};

fn constraints(card_type: CardType, min: f32, max: Option<f32>, gap: f32) -> LayoutConstraints {
    LayoutConstraints {
        card_type,
        min_card_width: min,
        max_card_width: max,
        preferred_gap: gap,
        max_gap: gap * 3.0,
    }
}

// =============================================================================
// CONCRETE SCENARIOS
// =============================================================================

#[test]
fn scenario_zero_width() {
    for card_type in [CardType::Horizontal, CardType::Vertical, CardType::Mixed] {
        let c = constraints(card_type, 180.0, Some(260.0), 12.0);
        assert_eq!(
            compute_layout(0.0, &c),
            LayoutResult {
                columns: 1,
                gap: 12.0,
                card_width: 180.0,
            }
        );
    }
}

#[test]
fn scenario_three_columns_at_1000() {
    let c = constraints(CardType::Vertical, 250.0, Some(400.0), 16.0);
    let layout = compute_layout(1000.0, &c);

    assert_eq!(layout.columns, 3);
    assert!((250.0..=400.0).contains(&layout.card_width));
    assert!(layout.row_width() <= 1000.0 + EPSILON);
}

#[test]
fn scenario_horizontal_single_column() {
    let c = constraints(CardType::Horizontal, 400.0, None, 16.0);
    assert_eq!(compute_layout(500.0, &c).columns, 1);
}

#[test]
fn scenario_vertical_capped_at_five() {
    let c = constraints(CardType::Vertical, 100.0, Some(150.0), 16.0);
    let layout = compute_layout(2000.0, &c);

    assert_eq!(layout.columns, 5);
    assert_eq!(layout.card_width, 150.0);
}

// =============================================================================
// LIFECYCLE
// =============================================================================

#[test]
fn mount_resize_unmount() {
    let grid = ResponsiveGrid::new(constraints(CardType::Vertical, 250.0, Some(400.0), 16.0))
        .expect("valid constraints");
    let source = ManualResize::with_width(1000.0);

    let seen: Rc<RefCell<Vec<(LayoutResult, LayoutChange)>>> = Rc::new(RefCell::new(Vec::new()));
    let seen_clone = seen.clone();
    let handle = grid.mount(&source, move |layout, change| {
        seen_clone.borrow_mut().push((layout, change));
    });

    // Eager layout at mount
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(seen.borrow()[0].0.columns, 3);

    // Shrink to one column, then grow back out
    source.resize(500.0);
    source.resize(1300.0);

    let columns: Vec<u32> = seen.borrow().iter().map(|(l, _)| l.columns).collect();
    assert_eq!(columns, vec![3, 1, 4]);
    assert_eq!(grid.layout().columns, 4);

    handle.unmount();
    assert!(source.listeners().is_empty());

    source.resize(500.0);
    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn two_grids_share_one_source() {
    let source = ManualResize::with_width(1100.0);
    let vertical = ResponsiveGrid::new(LayoutConstraints::preset(CardType::Vertical)).unwrap();
    let horizontal = ResponsiveGrid::new(LayoutConstraints::preset(CardType::Horizontal)).unwrap();

    let a = vertical.mount(&source, |_, _| {});
    let b = horizontal.mount(&source, |_, _| {});
    assert_eq!(source.listeners().len(), 2);

    source.resize(1400.0);
    assert_eq!(vertical.container_width(), 1400.0);
    assert_eq!(horizontal.container_width(), 1400.0);
    assert!(vertical.layout().columns >= horizontal.layout().columns);

    drop(a);
    assert_eq!(source.listeners().len(), 1);
    drop(b);
    assert!(source.listeners().is_empty());
}

#[test]
fn grid_from_json_config() {
    let config = GridConfig::from_json(
        r#"{
            "constraints": {
                "cardType": "vertical",
                "minCardWidth": 100,
                "maxCardWidth": 150,
                "preferredGap": 16,
                "maxGap": 48
            },
            "breakpoints": { "sm": 300, "md": 400, "lg": 500, "xl": 600 }
        }"#,
    )
    .unwrap();
    let grid = ResponsiveGrid::from_config(config).unwrap();

    grid.set_container_width(700.0);
    assert_eq!(grid.layout().columns, 5);

    let arrangement = grid.arrange(10).unwrap();
    assert_eq!(arrangement.rows(grid.layout().columns), 2);
    for card in &arrangement.cards {
        assert!(card.right() <= grid.layout().row_width() + 0.5);
    }
}
