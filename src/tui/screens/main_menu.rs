//! # Main Menu Screen
//!
//! Entry screen. Up/down move a clamped cursor over four items; Enter
//! activates the highlighted one:
//!
//! | Item         | Transition              |
//! |--------------|-------------------------|
//! | Study        | new `BrowseScreen`      |
//! | Browse Decks | new `BrowseScreen`      |
//! | Statistics   | new `StatisticsScreen`  |
//! | Quit         | quit                    |

use std::sync::Arc;

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::store::SharedStore;
use crate::tui::component::Component;
use crate::tui::components::{ChartTheme, HelpBar};
use crate::tui::event::TuiEvent;
use crate::tui::screen::{Screen, Transition};
use crate::tui::screens::{BrowseScreen, StatisticsScreen};

const HELP: &[(&str, &str)] = &[("↑/↓", "Navigate"), ("Enter", "Select"), ("q", "Quit")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Study,
    BrowseDecks,
    Statistics,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Study,
        MenuItem::BrowseDecks,
        MenuItem::Statistics,
        MenuItem::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Study => "Study",
            MenuItem::BrowseDecks => "Browse Decks",
            MenuItem::Statistics => "Statistics",
            MenuItem::Quit => "Quit",
        }
    }
}

pub struct MainMenu {
    cursor: usize,
    /// Index of the last activated item.
    selected: Option<usize>,
    width: u16,
    height: u16,
    store: SharedStore,
    theme: Arc<ChartTheme>,
}

impl MainMenu {
    pub fn new(store: SharedStore) -> Self {
        Self {
            cursor: 0,
            selected: None,
            width: 0,
            height: 0,
            store,
            theme: Arc::new(ChartTheme::default()),
        }
    }

    /// Chart styling handed on to the statistics screens this menu opens.
    pub fn with_theme(mut self, theme: Arc<ChartTheme>) -> Self {
        self.theme = theme;
        self
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Last known terminal size, `(0, 0)` until the first resize.
    pub fn viewport(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn activate(&mut self) -> Transition {
        self.selected = Some(self.cursor);
        let item = MenuItem::ALL[self.cursor];
        debug!("Menu item activated: {}", item.label());

        match item {
            // Study starts from deck selection
            MenuItem::Study | MenuItem::BrowseDecks => Transition::Switch(Box::new(
                BrowseScreen::new(self.store.clone()).with_theme(self.theme.clone()),
            )),
            MenuItem::Statistics => Transition::Switch(Box::new(
                StatisticsScreen::new(self.store.clone()).with_theme(self.theme.clone()),
            )),
            MenuItem::Quit => Transition::Quit,
        }
    }
}

impl Screen for MainMenu {
    fn name(&self) -> &'static str {
        "main-menu"
    }

    fn handle_event(&mut self, event: &TuiEvent) -> Transition {
        match *event {
            TuiEvent::Quit => Transition::Quit,
            TuiEvent::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                Transition::Stay
            }
            TuiEvent::Down => {
                self.cursor = (self.cursor + 1).min(MenuItem::ALL.len() - 1);
                Transition::Stay
            }
            TuiEvent::Select => self.activate(),
            TuiEvent::Resize(width, height) => {
                self.width = width;
                self.height = height;
                Transition::Stay
            }
            _ => Transition::Stay,
        }
    }
}

impl Component for MainMenu {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Deckhand",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Terminal Flashcards",
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
        ];

        for (i, item) in MenuItem::ALL.iter().enumerate() {
            let line = if i == self.cursor {
                Line::from(Span::styled(
                    format!("> {}", item.label()),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", item.label()),
                    Style::default().fg(Color::Gray),
                ))
            };
            lines.push(line);
        }

        let menu_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let [menu_area, _, help_area] = Layout::vertical([
            Constraint::Length(lines.len() as u16),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        let [menu_area] = Layout::horizontal([Constraint::Length(menu_width)])
            .flex(Flex::Center)
            .areas(menu_area);

        frame.render_widget(Paragraph::new(lines), menu_area);

        let help = Paragraph::new(HelpBar::new(HELP).line()).alignment(Alignment::Center);
        frame.render_widget(help, help_area);
    }
}
