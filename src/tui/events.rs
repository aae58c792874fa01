use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    NextMode,
    PrevMode,
    FocusNext,
    FocusPrev,
    Convert,
    CopyResult,
    CopyMapLink,
    CopyShareLink,
    ClearHistory,
    ToggleTheme,
    Input(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        // Mode switching
        (KeyCode::Left, _) => Action::PrevMode,
        (KeyCode::Right, _) => Action::NextMode,

        // Field focus
        (KeyCode::Tab, _) => Action::FocusNext,
        (KeyCode::BackTab, _) => Action::FocusPrev,
        (KeyCode::Down, _) => Action::FocusNext,
        (KeyCode::Up, _) => Action::FocusPrev,

        // Actions
        (KeyCode::Enter, _) => Action::Convert,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyResult,
        (KeyCode::Char('g'), KeyModifiers::CONTROL) => Action::CopyMapLink,
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => Action::CopyShareLink,
        (KeyCode::Char('x'), KeyModifiers::CONTROL) => Action::ClearHistory,
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => Action::ToggleTheme,

        // Field input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::Input(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}
