//! Keyboard input handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Input;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// A keypad key
    Press(Input),
    /// Switch between the calculator and history tabs
    NextTab,
    /// Empty the history log
    ClearHistory,
    /// Switch between light and dark
    ToggleTheme,
    /// Show the about dialog
    About,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::ClearHistory,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('t') => KeyAction::ToggleTheme,
            KeyCode::Char('?') => KeyAction::About,
            KeyCode::Char(c) => Input::from_char(c).map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Enter => KeyAction::Press(Input::Equals),
            KeyCode::Esc => KeyAction::Press(Input::Clear),
            KeyCode::Backspace | KeyCode::Delete => KeyAction::Press(Input::Backspace),
            KeyCode::Tab | KeyCode::BackTab => KeyAction::NextTab,
            _ => KeyAction::None,
        }
    }
}
