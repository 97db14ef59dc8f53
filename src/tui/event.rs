//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::DawdleError;
use crate::timer::{Command, Controls};
use crate::tui::app::App;

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Forward a command to the session.
    Command(Command),
}

/// Map one key press to an action.
///
/// Keys for controls that are currently disabled are swallowed.
pub fn map_key(app: &mut App, controls: Controls, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if app.show_help {
        // Any key closes help; q still quits.
        app.show_help = false;
        return matches!(key.code, KeyCode::Char('q')).then_some(Action::Quit);
    }

    let command = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Char('?') => {
            app.toggle_help();
            return None;
        }
        KeyCode::Char(c) if (c.is_ascii_digit() || c == '.') && controls.minutes => {
            app.push_char(c);
            return None;
        }
        KeyCode::Backspace if controls.minutes => {
            app.backspace();
            return None;
        }
        KeyCode::Enter | KeyCode::Char('s') if controls.start => Command::Start(app.minutes()),
        KeyCode::Char('b') if controls.beg => Command::Beg(app.minutes()),
        KeyCode::Char('z') if controls.snooze => Command::Snooze,
        KeyCode::Char('r') if controls.reset => Command::Reset,
        KeyCode::Char('n') if controls.restart => Command::Restart,
        _ => return None,
    };
    Some(Action::Command(command))
}

/// Drain pending terminal events without blocking.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App, controls: Controls) -> Result<Vec<Action>, DawdleError> {
    let mut actions = Vec::new();

    while event::poll(Duration::ZERO)
        .map_err(|e| DawdleError::Terminal(format!("Event poll failed: {e}")))?
    {
        let event =
            event::read().map_err(|e| DawdleError::Terminal(format!("Event read failed: {e}")))?;
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(action) = map_key(app, controls, key) {
                actions.push(action);
            }
        }
    }

    Ok(actions)
}
