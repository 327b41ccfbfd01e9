//! # TUI Components
//!
//! Building blocks the screens compose.
//!
//! ## Component Architecture
//!
//! Both components here are stateless and props-based: they receive all
//! data as struct fields and render into the `Rect` they are given.
//!
//! - `RatingChart`: Ratings distribution bar chart, styled by a `ChartTheme`
//! - `HelpBar`: Key hint footer
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into global
//! state. The chart's colours and labels in particular arrive as an explicit
//! `ChartTheme`:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! RatingChart::new(&report.distribution, &theme).render(frame, area);
//! ```

pub mod help_bar;
pub mod rating_chart;

pub use help_bar::HelpBar;
pub use rating_chart::{ChartTheme, RatingChart};
