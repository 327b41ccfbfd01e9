//! # Screens and Navigation
//!
//! Exactly one screen is live at a time. The [`Navigator`] owns it, feeds it
//! events one at a time, and swaps it out when the screen asks for a
//! [`Transition`].
//!
//! ```text
//!            Select "Study" / "Browse Decks"
//!   MainMenu ───────────────────────────────▶ BrowseScreen
//!      │                                          │ Select
//!      │ Select "Statistics"                      ▼
//!      └────────────────────────────────▶ StatisticsScreen
//!
//!   Quit (any screen, or "Quit" item) ──▶ loop ends
//! ```
//!
//! Transitions replace the current screen outright. There is no back stack:
//! a screen that wants to return to the menu builds a fresh `MainMenu`.

use log::{debug, info};
use ratatui::Frame;

use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// What the event loop should do after a screen handled an event.
pub enum Transition {
    Stay,
    Switch(Box<dyn Screen>),
    Quit,
}

/// A full-window view that reacts to input.
pub trait Screen: Component {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Called once when the screen becomes active.
    fn init(&mut self) -> Transition {
        Transition::Stay
    }

    /// Handle one event to completion.
    fn handle_event(&mut self, event: &TuiEvent) -> Transition;
}

/// The screen state machine.
pub struct Navigator {
    current: Box<dyn Screen>,
    running: bool,
}

impl Navigator {
    pub fn new(initial: Box<dyn Screen>) -> Self {
        let mut navigator = Self {
            current: initial,
            running: true,
        };
        info!("Starting on screen: {}", navigator.current.name());
        let transition = navigator.current.init();
        navigator.apply(transition);
        navigator
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn current_name(&self) -> &'static str {
        self.current.name()
    }

    /// Feed one event to the active screen.
    ///
    /// Quit ends the machine regardless of which screen is showing.
    pub fn dispatch(&mut self, event: &TuiEvent) {
        if !self.running {
            return;
        }
        if matches!(event, TuiEvent::Quit) {
            info!("Quit requested on {}", self.current.name());
            self.running = false;
            return;
        }
        let transition = self.current.handle_event(event);
        self.apply(transition);
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.current.render(frame, area);
    }

    fn apply(&mut self, mut transition: Transition) {
        loop {
            match transition {
                Transition::Stay => return,
                Transition::Quit => {
                    info!("Quit from {}", self.current.name());
                    self.running = false;
                    return;
                }
                Transition::Switch(next) => {
                    debug!("Screen transition: {} -> {}", self.current.name(), next.name());
                    self.current = next;
                    transition = self.current.init();
                }
            }
        }
    }
}
