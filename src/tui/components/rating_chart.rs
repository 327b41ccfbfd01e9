//! # Rating Chart Component
//!
//! Horizontal bar chart of recent ratings, one bar per rating 1 → 5:
//!
//! ```text
//! Blackout (1)    ██ 6%
//!
//! Wrong    (2)
//!
//! Hard     (3)    ███████ 25%
//! ```
//!
//! All colours, labels and sizes come from a [`ChartTheme`] handed in by the
//! parent. The chart reads no global style state.

use std::str::FromStr;

use log::warn;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::config::{DEFAULT_BAR_SYMBOL, DEFAULT_RATING_COLORS, ResolvedConfig};
use crate::core::model::Rating;
use crate::core::stats::{DEFAULT_MAX_BAR_WIDTH, RatingDistribution, chart_rows};
use crate::tui::component::Component;

/// Shown instead of the bars when there are no recent reviews.
pub const NO_DATA_MESSAGE: &str = "No ratings data available";

const LABEL_WIDTH: usize = 15;

/// Label and colour table for the ratings chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    /// Indexed by `Rating::index()`.
    pub labels: [String; 5],
    /// Indexed by `Rating::index()`.
    pub colors: [Color; 5],
    pub bar_symbol: String,
    pub max_bar_width: usize,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            labels: Rating::ALL.map(|r| r.label().to_string()),
            colors: DEFAULT_RATING_COLORS.map(|spec| parse_color(spec).unwrap_or(Color::Reset)),
            bar_symbol: DEFAULT_BAR_SYMBOL.to_string(),
            max_bar_width: DEFAULT_MAX_BAR_WIDTH,
        }
    }
}

impl ChartTheme {
    /// Build from resolved config. Unparsable colours keep their default.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let defaults = Self::default();
        let colors = std::array::from_fn(|i| {
            let spec = &config.rating_colors[i];
            parse_color(spec).unwrap_or_else(|| {
                warn!("Unknown colour '{}' for {}, using default", spec, Rating::ALL[i].label());
                defaults.colors[i]
            })
        });
        Self {
            colors,
            bar_symbol: config.bar_symbol.clone(),
            max_bar_width: config.max_bar_width,
            ..defaults
        }
    }

    pub fn label(&self, rating: Rating) -> &str {
        &self.labels[rating.index()]
    }

    pub fn style(&self, rating: Rating) -> Style {
        Style::default().fg(self.colors[rating.index()])
    }
}

fn parse_color(spec: &str) -> Option<Color> {
    Color::from_str(spec.trim()).ok()
}

/// Transient chart wrapper, created each frame with borrowed props.
pub struct RatingChart<'a> {
    distribution: &'a RatingDistribution,
    theme: &'a ChartTheme,
}

impl<'a> RatingChart<'a> {
    pub fn new(distribution: &'a RatingDistribution, theme: &'a ChartTheme) -> Self {
        Self {
            distribution,
            theme,
        }
    }

    /// The chart as styled lines, bars separated by blank lines.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let Some(rows) = chart_rows(self.distribution, self.theme.max_bar_width) else {
            return vec![Line::from(NO_DATA_MESSAGE)];
        };

        let mut lines = Vec::with_capacity(rows.len() * 2);
        for (i, row) in rows.iter().enumerate() {
            let label = format!("{:<8} ({})", self.theme.label(row.rating), row.rating.score());
            let mut spans = vec![Span::raw(format!("{label:<LABEL_WIDTH$} "))];

            if row.bar_width > 0 {
                spans.push(Span::styled(
                    self.theme.bar_symbol.repeat(row.bar_width),
                    self.theme.style(row.rating),
                ));
            }
            if row.percent > 0 {
                spans.push(Span::raw(format!(" {}%", row.percent)));
            }

            lines.push(Line::from(spans));
            if i + 1 < rows.len() {
                lines.push(Line::default());
            }
        }
        lines
    }
}

impl Component for RatingChart<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines()), area);
    }
}
