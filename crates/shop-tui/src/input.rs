//! Keyboard input
//!
//! Translates key events into [`Command`]s. Priority keys (Ctrl+C, Esc)
//! are checked first, then plain bindings.

use crate::variants::Tab;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    NextTab,
    PreviousTab,
    SelectTab(Tab),
    NavigateNext,
    NavigatePrevious,
    AddSelectedToCart,
}

/// Map a key press to a command
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Tab => Some(Command::NextTab),
        KeyCode::BackTab => Some(Command::PreviousTab),
        KeyCode::Char('1') => Some(Command::SelectTab(Tab::State)),
        KeyCode::Char('2') => Some(Command::SelectTab(Tab::Store)),
        KeyCode::Char('3') => Some(Command::SelectTab(Tab::Connected)),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::NavigateNext),
        KeyCode::Up | KeyCode::Char('k') => Some(Command::NavigatePrevious),
        KeyCode::Enter | KeyCode::Char('a') => Some(Command::AddSelectedToCart),
        _ => None,
    }
}
