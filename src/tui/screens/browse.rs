//! # Browse Screen
//!
//! Deck list with card counts and last-studied dates. Enter opens the
//! statistics for the highlighted deck; Esc goes back to the menu.

use std::sync::Arc;

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::stats::format_last_studied;
use crate::core::store::SharedStore;
use crate::tui::component::Component;
use crate::tui::components::{ChartTheme, HelpBar};
use crate::tui::event::TuiEvent;
use crate::tui::screen::{Screen, Transition};
use crate::tui::screens::{MainMenu, StatisticsScreen};

const HELP: &[(&str, &str)] = &[
    ("↑/↓", "Navigate"),
    ("Enter", "Statistics"),
    ("Esc", "Menu"),
    ("q", "Quit"),
];

pub struct BrowseScreen {
    store: SharedStore,
    theme: Arc<ChartTheme>,
    cursor: usize,
    list_state: ListState,
}

impl BrowseScreen {
    pub fn new(store: SharedStore) -> Self {
        let mut list_state = ListState::default();
        if !store.get_decks().is_empty() {
            list_state.select(Some(0));
        }
        Self {
            store,
            theme: Arc::new(ChartTheme::default()),
            cursor: 0,
            list_state,
        }
    }

    pub fn with_theme(mut self, theme: Arc<ChartTheme>) -> Self {
        self.theme = theme;
        self
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn deck_count(&self) -> usize {
        self.store.get_decks().len()
    }

    fn move_cursor(&mut self, down: bool) {
        let count = self.deck_count();
        if count == 0 {
            return;
        }
        self.cursor = if down {
            (self.cursor + 1).min(count - 1)
        } else {
            self.cursor.saturating_sub(1)
        };
        self.list_state.select(Some(self.cursor));
    }
}

impl Screen for BrowseScreen {
    fn name(&self) -> &'static str {
        "browse"
    }

    fn handle_event(&mut self, event: &TuiEvent) -> Transition {
        match event {
            TuiEvent::Quit => Transition::Quit,
            TuiEvent::Up => {
                self.move_cursor(false);
                Transition::Stay
            }
            TuiEvent::Down => {
                self.move_cursor(true);
                Transition::Stay
            }
            TuiEvent::Select => match self.store.get_decks().get(self.cursor) {
                Some(deck) => Transition::Switch(Box::new(
                    StatisticsScreen::new(self.store.clone())
                        .with_focus(deck.id.clone())
                        .with_theme(self.theme.clone()),
                )),
                None => Transition::Stay,
            },
            TuiEvent::Back => Transition::Switch(Box::new(
                MainMenu::new(self.store.clone()).with_theme(self.theme.clone()),
            )),
            _ => Transition::Stay,
        }
    }
}

impl Component for BrowseScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [list_area, help_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        frame.render_widget(
            Paragraph::new(HelpBar::new(HELP).line()).alignment(Alignment::Center),
            help_area,
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Decks ")
            .padding(Padding::horizontal(1));

        let decks = self.store.get_decks();
        if decks.is_empty() {
            let empty = Paragraph::new("No decks found.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, list_area);
            return;
        }

        let now = Local::now();
        let inner_width = list_area.width.saturating_sub(4) as usize; // borders + padding

        let items: Vec<ListItem> = decks
            .iter()
            .enumerate()
            .map(|(i, deck)| {
                let count = format!("{:>4} cards", deck.cards.len());
                let studied = format!("{:>10}", format_last_studied(deck.last_studied, &now));

                // Layout: "<name>   12 cards   Yesterday"
                let fixed_width = count.len() + 2 + studied.width() + 2;
                let name_width = inner_width.saturating_sub(fixed_width);
                let name = truncate_str(&deck.name, name_width);
                let padded_name = format!("{:<width$}", name, width = name_width);

                let style = if i == self.cursor {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(padded_name, style),
                    Span::styled("  ", style),
                    Span::styled(count, style),
                    Span::styled("  ", style),
                    Span::styled(studied, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, list_area, &mut self.list_state);
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
