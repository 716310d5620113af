//! Calculator core: keypad state machine, arithmetic and history
//!
//! Nothing in here performs I/O or logs. Errors are returned to the caller,
//! which decides how to present them.

mod calculator;
mod format;
pub mod history;
mod input;
mod operations;

pub use calculator::Calculator;
pub use format::format_result;
pub use input::{parse_script, Input, UnknownKey};
pub use operations::Operator;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The display text could not be parsed as a number
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
    /// Right operand of `÷` or `%` was zero
    #[error("Division by zero")]
    DivisionByZero,
}
