//! TUI application state
//!
//! Wraps a [`Session`] with the pieces only the terminal front-end needs:
//! the keypad highlight, the selected tab and an optional modal dialog.
//! While a dialog is open, the next key only dismisses it.

use super::input::KeyAction;
use super::keypad::Keypad;
use crate::config::{PathProvider, Theme};
use crate::core::{CalcError, Calculator, Input};
use crate::session::Session;

/// Tabs of the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Display and keypad
    #[default]
    Calculator,
    /// History list, newest first
    History,
}

impl Tab {
    /// Title shown in the tab bar
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Calculator => "Calculator",
            Self::History => "History",
        }
    }

    /// Index in the tab bar
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Calculator => 0,
            Self::History => 1,
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::Calculator => Self::History,
            Self::History => Self::Calculator,
        }
    }
}

/// Modal dialogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// A calculator operation failed
    Error(CalcError),
    /// Program information
    About,
}

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp<P: PathProvider> {
    session: Session<P>,
    keypad: Keypad,
    tab: Tab,
    dialog: Option<Dialog>,
    should_quit: bool,
}

impl<P: PathProvider> CalculatorApp<P> {
    /// Creates an app over an opened session
    #[must_use]
    pub fn new(session: Session<P>) -> Self {
        Self {
            session,
            keypad: Keypad::new(),
            tab: Tab::default(),
            dialog: None,
            should_quit: false,
        }
    }

    /// Returns the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        self.session.calculator()
    }

    /// Returns the session
    #[must_use]
    pub fn session(&self) -> &Session<P> {
        &self.session
    }

    /// Returns the session, e.g. to save it on exit
    #[must_use]
    pub fn into_session(self) -> Session<P> {
        self.session
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the current theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.session.theme()
    }

    /// Returns the selected tab
    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Returns the open dialog
    #[must_use]
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Closes the open dialog, if any
    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    /// Closes an error dialog and returns its error
    pub fn take_error(&mut self) -> Option<CalcError> {
        match self.dialog.take() {
            Some(Dialog::Error(e)) => Some(e),
            other => {
                self.dialog = other;
                None
            }
        }
    }

    /// Presses a keypad key. A failure opens an error dialog; the
    /// calculator itself is left as the failed operation left it.
    pub fn press(&mut self, input: Input) {
        self.keypad.highlight(input);
        if let Err(e) = self.session.calculator_mut().press(input) {
            self.dialog = Some(Dialog::Error(e));
        }
    }

    /// Presses the keypad button at `index` (from a mouse click)
    pub fn click(&mut self, index: usize) {
        if self.dialog.is_some() {
            self.dismiss_dialog();
            return;
        }
        if let Some(input) = self.keypad.get_button(index).and_then(|b| b.action) {
            self.press(input);
        }
    }

    /// Switches to the other tab
    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
        self.keypad.release_all();
    }

    /// Empties the history log
    pub fn clear_history(&mut self) {
        self.session.calculator_mut().clear_history();
    }

    /// Switches between light and dark
    pub fn toggle_theme(&mut self) {
        self.session.toggle_theme();
    }

    /// Applies one key action
    pub fn handle_action(&mut self, action: KeyAction) {
        if action == KeyAction::Quit {
            self.quit();
            return;
        }
        if self.dialog.is_some() {
            if action != KeyAction::None {
                self.dismiss_dialog();
            }
            return;
        }
        match action {
            KeyAction::Press(input) => self.press(input),
            KeyAction::NextTab => self.next_tab(),
            KeyAction::ClearHistory => self.clear_history(),
            KeyAction::ToggleTheme => self.toggle_theme(),
            KeyAction::About => self.dialog = Some(Dialog::About),
            KeyAction::Quit | KeyAction::None => {}
        }
    }

    /// One-line summary of the pending operation for the status bar
    #[must_use]
    pub fn status_line(&self) -> String {
        let calc = self.calculator();
        match calc.pending_operator() {
            Some(op) => format!(
                "{} {}",
                crate::core::format_result(calc.operand()),
                op.symbol()
            ),
            None => String::new(),
        }
    }
}
