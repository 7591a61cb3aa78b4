//! Event handling for the TUI.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::Session;
use super::delete::Remover;

/// Everything that can change a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The terminal changed size.
    Resize { width: u16, height: u16 },
    Quit,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    JumpHome,
    JumpEnd,
    SwitchView,
    ToggleSelect,
    RequestDelete,
    ConfirmDelete,
    CancelDelete,
    /// Clear a displayed deletion error.
    DismissError,
}

/// Apply one event to the session and return the new state.
///
/// While a deletion error is displayed only quit, resize and dismiss are
/// accepted.
pub fn update<R: Remover + ?Sized>(mut session: Session, event: Event, remover: &R) -> Session {
    if session.last_error.is_some()
        && !matches!(event, Event::Quit | Event::Resize { .. } | Event::DismissError)
    {
        return session;
    }

    match event {
        Event::Resize { width, height } => session.resize(width, height),
        Event::Quit => session.should_quit = true,
        Event::MoveUp => session.move_up(),
        Event::MoveDown => session.move_down(),
        Event::PageUp => session.page_up(),
        Event::PageDown => session.page_down(),
        Event::JumpHome => session.jump_home(),
        Event::JumpEnd => session.jump_end(),
        Event::SwitchView => session.switch_view(),
        Event::ToggleSelect => session.toggle_select(),
        Event::RequestDelete => session.request_delete(),
        Event::ConfirmDelete => session.confirm_delete(remover),
        Event::CancelDelete => session.cancel_delete(),
        Event::DismissError => session.dismiss_error(),
    }

    session
}

/// Wait up to `timeout` for the next terminal event that maps to an [`Event`].
pub fn next_event(session: &Session, timeout: Duration) -> io::Result<Option<Event>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let mapped = match event::read()? {
        TermEvent::Key(key) => map_key(session, key),
        TermEvent::Resize(width, height) => Some(Event::Resize { width, height }),
        _ => None,
    };
    Ok(mapped)
}

/// Translate a key press into an event. Unbound keys map to `None`.
pub fn map_key(session: &Session, key: KeyEvent) -> Option<Event> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Works in any state
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Event::Quit);
    }

    if session.last_error.is_some() {
        return match key.code {
            KeyCode::Char('q') => Some(Event::Quit),
            KeyCode::Esc | KeyCode::Enter => Some(Event::DismissError),
            _ => None,
        };
    }

    let event = match key.code {
        KeyCode::Char('q') => Event::Quit,

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Event::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Event::MoveDown,
        KeyCode::PageUp => Event::PageUp,
        KeyCode::PageDown => Event::PageDown,
        KeyCode::Home | KeyCode::Char('g') => Event::JumpHome,
        KeyCode::End | KeyCode::Char('G') => Event::JumpEnd,
        KeyCode::Tab => Event::SwitchView,

        // Selection and deletion
        KeyCode::Char(' ') => Event::ToggleSelect,
        KeyCode::Char('d') => Event::RequestDelete,
        KeyCode::Char('y') | KeyCode::Char('Y') => Event::ConfirmDelete,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc if session.confirming_delete => {
            Event::CancelDelete
        }

        _ => return None,
    };
    Some(event)
}
