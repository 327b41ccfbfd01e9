//! # HelpBar Component
//!
//! One-line key hint footer shared by every screen, e.g.
//! `↑/↓: Navigate   Enter: Select   q: Quit`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

/// Stateless footer listing `(key, action)` hints.
pub struct HelpBar {
    pub hints: &'static [(&'static str, &'static str)],
}

impl HelpBar {
    pub fn new(hints: &'static [(&'static str, &'static str)]) -> Self {
        Self { hints }
    }

    pub fn line(&self) -> Line<'static> {
        let key_style = Style::default().fg(Color::Gray);
        let action_style = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::with_capacity(self.hints.len() * 3);
        for (i, (key, action)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(format!("{key}: "), key_style));
            spans.push(Span::styled(*action, action_style));
        }
        Line::from(spans)
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}
