//! # Screens
//!
//! Full-window views driven by the [`Navigator`](crate::tui::screen::Navigator).
//! Each screen is built from the shared store alone (plus an optional chart
//! theme) and is dropped as soon as the user navigates away.
//!
//! ```text
//! screens/
//! ├── mod.rs         (this file)
//! ├── main_menu.rs   (Entry menu)
//! ├── browse.rs      (Deck list)
//! └── statistics.rs  (Deck review dashboard)
//! ```

pub mod browse;
pub mod main_menu;
pub mod statistics;

pub use browse::BrowseScreen;
pub use main_menu::{MainMenu, MenuItem};
pub use statistics::StatisticsScreen;
