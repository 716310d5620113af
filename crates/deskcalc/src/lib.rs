//! Deskcalc - keypad calculator with a running total
//!
//! The [`core::Calculator`] mimics a pocket calculator: digits build up the
//! display, operators fold into a running total, `=` evaluates and appends a
//! line such as `"5 + 3 = 8"` to the history. Preferences and history are
//! persisted as JSON by [`config::ConfigStore`], and [`session::Session`]
//! ties the two together for the lifetime of the application.
//!
//! # Example
//!
//! ```rust
//! use deskcalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.input_digit(1);
//! calc.input_operator(Operator::Divide).unwrap();
//! calc.input_digit(3);
//! calc.calculate().unwrap();
//! assert_eq!(calc.display(), "0.333333");
//! assert_eq!(calc.history().last(), Some("1 ÷ 3 = 0.333333"));
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod session;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{
        Config, ConfigError, ConfigStore, FixedDir, PathProvider, PlatformDirs, Theme,
    };
    pub use crate::core::history::History;
    pub use crate::core::{
        format_result, parse_script, CalcError, CalcResult, Calculator, Input, Operator,
    };
    pub use crate::driver::{CalculatorDriver, DriverError};
    pub use crate::session::Session;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut calc = Calculator::new();
        calc.run_script("6×7=").unwrap();
        assert_eq!(calc.display(), "42");
        assert_eq!(format_result(0.5), "0.5");
    }

    #[test]
    fn test_chained_then_equals() {
        let mut calc = Calculator::new();
        calc.run_script("5+3+").unwrap();
        assert_eq!(calc.display(), "8");
        calc.run_script("2=").unwrap();
        assert_eq!(calc.display(), "10");
    }

    #[test]
    fn test_error_handling() {
        let mut calc = Calculator::new();
        assert!(matches!(
            calc.run_script("5÷0="),
            Err(DriverError::Calc(CalcError::DivisionByZero))
        ));
        assert_eq!(calc.display(), "0");
    }
}
