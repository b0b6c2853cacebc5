//! Terminal Grid Example - Live column packing on terminal resize
//!
//! This example demonstrates:
//! - Mounting a responsive grid on the terminal as a resize source
//! - Receiving a new layout each time the terminal is resized
//! - Arranging cards for the current layout
//!
//! Each terminal column counts as 8 pixels. Resize the window to see the
//! column count change; press `q` or Esc to quit.
//!
//! Run with: RUST_LOG=card_grid=debug cargo run --example terminal_grid

use std::time::Duration;

use card_grid::{CardType, GridConfig, ResponsiveGrid, TerminalResize};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal;
use tracing_subscriber::EnvFilter;

const CELL_WIDTH: f32 = 8.0;
const CARD_COUNT: usize = 12;

fn is_quit(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(KeyEvent { code: KeyCode::Char('q') | KeyCode::Esc, .. })
            | Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let grid = ResponsiveGrid::from_config(GridConfig::preset(CardType::Vertical))?;
    let source = TerminalResize::with_cell_width(CELL_WIDTH);

    println!("=== card-grid Terminal Example ===\n");

    terminal::enable_raw_mode()?;

    let handle = grid.mount(&source, |layout, change| {
        print!(
            "{} columns, card {:.1}px, gap {:.1}px ({:?})\r\n",
            layout.columns, layout.card_width, layout.gap, change
        );
    });

    let result = (|| -> Result<(), Box<dyn std::error::Error>> {
        loop {
            let events = source.poll(Duration::from_millis(100))?;
            if events.iter().any(is_quit) {
                return Ok(());
            }
            if !events.is_empty() {
                continue;
            }

            let arrangement = grid.arrange(CARD_COUNT)?;
            if let Some(last) = arrangement.cards.last() {
                tracing::trace!(
                    rows = arrangement.rows(grid.layout().columns),
                    last_card_bottom = last.bottom(),
                    "arrangement"
                );
            }
        }
    })();

    handle.unmount();
    terminal::disable_raw_mode()?;

    result
}
