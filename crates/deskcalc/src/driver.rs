//! Calculator drivers
//!
//! A keystroke scenario is written once against [`CalculatorDriver`] and
//! replayed against the bare [`Calculator`] or, with the `tui` feature, the
//! terminal application (which routes keys through its keypad and dialog
//! handling).

use crate::core::{parse_script, CalcError, CalcResult, Calculator, Input, UnknownKey};
use thiserror::Error;

/// Errors from replaying a keystroke script
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// The script contained an unknown key
    #[error(transparent)]
    Script(#[from] UnknownKey),
    /// A key press failed
    #[error(transparent)]
    Calc(#[from] CalcError),
}

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses one key
    fn press(&mut self, input: Input) -> CalcResult<()>;

    /// Gets the current display text
    fn display(&self) -> String;

    /// Gets history entries, oldest first
    fn history(&self) -> Vec<String>;

    /// Presses every key of `script`, stopping at the first failure
    fn run_script(&mut self, script: &str) -> Result<(), DriverError> {
        for input in parse_script(script)? {
            self.press(input)?;
        }
        Ok(())
    }
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, input: Input) -> CalcResult<()> {
        Calculator::press(self, input)
    }

    fn display(&self) -> String {
        Calculator::display(self).to_string()
    }

    fn history(&self) -> Vec<String> {
        Calculator::history(self).entries().to_vec()
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalcResult, CalculatorDriver, Input};
    use crate::config::PathProvider;
    use crate::tui::{CalculatorApp, KeyAction};

    /// Drives a [`CalculatorApp`] the way key presses would
    #[derive(Debug)]
    pub struct TuiDriver<P: PathProvider> {
        app: CalculatorApp<P>,
    }

    impl<P: PathProvider> TuiDriver<P> {
        /// Creates a driver over an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp<P>) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp<P> {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp<P> {
            &mut self.app
        }

        /// Returns the underlying app
        #[must_use]
        pub fn into_app(self) -> CalculatorApp<P> {
            self.app
        }
    }

    impl<P: PathProvider> CalculatorDriver for TuiDriver<P> {
        fn press(&mut self, input: Input) -> CalcResult<()> {
            self.app.handle_action(KeyAction::Press(input));
            match self.app.take_error() {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }

        fn display(&self) -> String {
            self.app.calculator().display().to_string()
        }

        fn history(&self) -> Vec<String> {
            self.app.calculator().history().entries().to_vec()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;
