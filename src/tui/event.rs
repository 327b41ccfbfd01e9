use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    Up,
    Down,
    Left,
    Right,
    /// Enter: activate the highlighted item
    Select,
    /// Esc / Backspace: leave the current screen
    Back,
    Resize(u16, u16),
}

/// Poll for an event, blocking up to `timeout`.
///
/// Returns `Ok(None)` on timeout or for input with no binding.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(map_event(event::read()?))
    } else {
        Ok(None)
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Translate a raw crossterm event into a `TuiEvent`.
pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Releases and repeats arrive on terminals with keyboard enhancement
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::Up),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::Down),
        (_, KeyCode::Left | KeyCode::Char('h')) => Some(TuiEvent::Left),
        (_, KeyCode::Right | KeyCode::Char('l')) => Some(TuiEvent::Right),
        (_, KeyCode::Enter) => Some(TuiEvent::Select),
        (_, KeyCode::Esc | KeyCode::Backspace) => Some(TuiEvent::Back),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_vim_and_arrow_keys() {
        let none = KeyModifiers::NONE;
        assert_eq!(map_event(key(KeyCode::Up, none)), Some(TuiEvent::Up));
        assert_eq!(map_event(key(KeyCode::Char('k'), none)), Some(TuiEvent::Up));
        assert_eq!(map_event(key(KeyCode::Down, none)), Some(TuiEvent::Down));
        assert_eq!(map_event(key(KeyCode::Char('j'), none)), Some(TuiEvent::Down));
        assert_eq!(map_event(key(KeyCode::Char('h'), none)), Some(TuiEvent::Left));
        assert_eq!(map_event(key(KeyCode::Right, none)), Some(TuiEvent::Right));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            map_event(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(TuiEvent::Quit)
        );
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Quit)
        );
        // Plain 'c' has no binding
        assert_eq!(map_event(key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_select_back_and_resize() {
        let none = KeyModifiers::NONE;
        assert_eq!(map_event(key(KeyCode::Enter, none)), Some(TuiEvent::Select));
        assert_eq!(map_event(key(KeyCode::Esc, none)), Some(TuiEvent::Back));
        assert_eq!(map_event(Event::Resize(100, 40)), Some(TuiEvent::Resize(100, 40)));
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_event(Event::Key(release)), None);
    }
}
