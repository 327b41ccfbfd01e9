//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the active
//! screen, and translates keyboard events into `TuiEvent` values for the
//! [`Navigator`](screen::Navigator).
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop redraws only when something happened:
//!
//! - **Input**: every handled event (including resize) flags a redraw.
//! - **Clock**: with no input, the screen is still redrawn every
//!   [`REFRESH_INTERVAL`] so time-relative statistics ("Today", the 30-day
//!   window) don't go stale on an idle dashboard.

pub mod component;
pub mod components;
pub mod event;
pub mod screen;
pub mod screens;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use log::{debug, info};
use ratatui::DefaultTerminal;

use crate::core::config::ResolvedConfig;
use crate::core::store::{SharedStore, Store};
use crate::tui::components::ChartTheme;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::screen::{Navigator, Screen};
use crate::tui::screens::{MainMenu, StatisticsScreen};

/// How long to block waiting for input before checking the refresh clock.
const POLL_TIMEOUT: Duration = Duration::from_millis(500);

/// Idle redraw period.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Build the first screen: the main menu, or straight to a deck's
/// statistics when one was requested on the command line.
pub fn initial_screen(
    store: SharedStore,
    theme: Arc<ChartTheme>,
    deck: Option<String>,
) -> Box<dyn Screen> {
    match deck {
        Some(id) => Box::new(StatisticsScreen::new(store).with_focus(id).with_theme(theme)),
        None => Box::new(MainMenu::new(store).with_theme(theme)),
    }
}

pub fn run(config: &ResolvedConfig, deck: Option<String>) -> io::Result<()> {
    let store: SharedStore = Arc::new(Store::open(&config.data_dir, Utc::now()));
    let theme = Arc::new(ChartTheme::from_config(config));
    let mut navigator = Navigator::new(initial_screen(store, theme, deck));

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut navigator);
    ratatui::restore();

    info!("Terminal restored, exiting");
    result
}

fn event_loop(terminal: &mut DefaultTerminal, navigator: &mut Navigator) -> io::Result<()> {
    // Let the first screen know the viewport before it draws
    let size = terminal.size()?;
    navigator.dispatch(&TuiEvent::Resize(size.width, size.height));

    let mut needs_redraw = true; // Force first frame
    let mut last_draw = Instant::now();

    while navigator.is_running() {
        if needs_redraw || last_draw.elapsed() >= REFRESH_INTERVAL {
            terminal.draw(|f| navigator.render(f))?;
            needs_redraw = false;
            last_draw = Instant::now();
        }

        // Process first event + drain ALL pending events before next draw
        let mut next = poll_event_timeout(POLL_TIMEOUT)?;
        while let Some(event) = next {
            debug!("Dispatching {:?} to {}", event, navigator.current_name());
            navigator.dispatch(&event);
            needs_redraw = true;
            if !navigator.is_running() {
                break;
            }
            next = poll_event_immediate()?;
        }
    }

    Ok(())
}
