//! # Statistics Screen
//!
//! Deck review dashboard for one deck: card counts, success rate, average
//! interval, last-studied date and the ratings chart.
//!
//! The deck is the explicit focus if one was given, otherwise the most
//! recently studied deck. Left/right step the focus through the store's
//! decks (wrapping). Metrics are recomputed on every draw against the
//! current time.

use std::sync::Arc;

use chrono::Local;
use log::debug;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::core::stats::{DeckLookup, DeckReport, lookup_deck, resolve_deck_id};
use crate::core::store::SharedStore;
use crate::tui::component::Component;
use crate::tui::components::{ChartTheme, HelpBar, RatingChart};
use crate::tui::event::TuiEvent;
use crate::tui::screen::{Screen, Transition};
use crate::tui::screens::MainMenu;

const HELP: &[(&str, &str)] = &[("←/→", "Deck"), ("Esc", "Menu"), ("q", "Quit")];

const LEFT_COLUMN_WIDTH: u16 = 26;

pub struct StatisticsScreen {
    store: SharedStore,
    theme: Arc<ChartTheme>,
    /// Explicit deck to show. `None` falls back to the last studied deck.
    focus: Option<String>,
}

impl StatisticsScreen {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            theme: Arc::new(ChartTheme::default()),
            focus: None,
        }
    }

    pub fn with_focus(mut self, deck_id: impl Into<String>) -> Self {
        self.focus = Some(deck_id.into());
        self
    }

    pub fn with_theme(mut self, theme: Arc<ChartTheme>) -> Self {
        self.theme = theme;
        self
    }

    pub fn focus(&self) -> Option<&str> {
        self.focus.as_deref()
    }

    /// Move the focus `step` decks along, wrapping at either end.
    fn cycle_deck(&mut self, step: isize) {
        let decks = self.store.get_decks();
        if decks.is_empty() {
            return;
        }

        let current = resolve_deck_id(self.focus.as_deref(), decks)
            .and_then(|id| decks.iter().position(|d| d.id == id));
        let next = match current {
            Some(index) => (index as isize + step).rem_euclid(decks.len() as isize) as usize,
            None => 0,
        };

        let id = decks[next].id.clone();
        debug!("Statistics focus -> {}", id);
        self.focus = Some(id);
    }

    fn render_report(&self, frame: &mut Frame, area: Rect, report: &DeckReport) {
        let label = Style::default().fg(Color::Gray);
        let value = Style::default().fg(Color::White);

        let chart = RatingChart::new(&report.distribution, &self.theme);
        let chart_lines = chart.lines();

        let [title_area, _, columns_area, _, chart_title_area, _, chart_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(area);

        frame.render_widget(
            Line::from(Span::styled(
                format!("Deck: {}", report.deck_name),
                label.add_modifier(Modifier::BOLD),
            )),
            title_area,
        );

        let stat = |name: &str, width: usize, text: String| {
            Line::from(vec![
                Span::styled(format!("{name:<width$}"), label),
                Span::styled(text, value),
            ])
        };

        let left = vec![
            stat("Total Cards:", 16, format!("{:>4}", report.total_cards)),
            stat("Mature Cards:", 16, format!("{:>4}", report.mature_cards)),
            stat("New Cards:", 16, format!("{:>4}", report.new_cards)),
        ];
        let right = vec![
            stat("Success Rate:", 16, format!("{:>3}%", report.success_rate)),
            stat("Avg. Interval:", 16, report.average_interval_text()),
            stat("Last Studied:", 16, report.last_studied.clone()),
        ];

        let [left_area, right_area] =
            Layout::horizontal([Constraint::Length(LEFT_COLUMN_WIDTH), Constraint::Min(0)])
                .areas(columns_area);
        frame.render_widget(Paragraph::new(left), left_area);
        frame.render_widget(Paragraph::new(right), right_area);

        frame.render_widget(
            Line::from(Span::styled("Ratings Distribution", label)),
            chart_title_area,
        );
        frame.render_widget(Paragraph::new(chart_lines), chart_area);
    }
}

impl Screen for StatisticsScreen {
    fn name(&self) -> &'static str {
        "statistics"
    }

    fn handle_event(&mut self, event: &TuiEvent) -> Transition {
        match event {
            TuiEvent::Quit => Transition::Quit,
            TuiEvent::Left => {
                self.cycle_deck(-1);
                Transition::Stay
            }
            TuiEvent::Right => {
                self.cycle_deck(1);
                Transition::Stay
            }
            TuiEvent::Back => Transition::Switch(Box::new(
                MainMenu::new(self.store.clone()).with_theme(self.theme.clone()),
            )),
            _ => Transition::Stay,
        }
    }
}

impl Component for StatisticsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [body_area, help_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        frame.render_widget(
            Paragraph::new(HelpBar::new(HELP).line()).alignment(Alignment::Center),
            help_area,
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Statistics ")
            .padding(Padding::new(2, 2, 1, 0));
        let inner = block.inner(body_area);
        frame.render_widget(block, body_area);

        match lookup_deck(&*self.store, self.focus.as_deref()) {
            DeckLookup::Found(deck) => {
                let report = DeckReport::build(deck, &Local::now());
                self.render_report(frame, inner, &report);
            }
            missing => {
                let message = missing.message().unwrap_or_default();
                frame.render_widget(
                    Paragraph::new(message).style(Style::default().fg(Color::DarkGray)),
                    inner,
                );
            }
        }
    }
}
