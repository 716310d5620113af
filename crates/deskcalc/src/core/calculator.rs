//! Keypad calculator state machine
//!
//! Behaves like a pocket calculator: digits build up the display, an
//! operator stores the running total and waits for the next operand, and
//! entering a second operator before `=` folds the pending operation into
//! the total (`5 + 3 +` shows `8`).

use crate::core::history::History;
use crate::core::{format_result, CalcError, CalcResult, Operator};

const ZERO: &str = "0";

/// Accumulator-style calculator driven by keypad events
#[derive(Debug, Clone)]
pub struct Calculator {
    /// Text currently shown; always a (possibly partial) decimal numeral
    display: String,
    /// Operator waiting for its right-hand operand
    pending: Option<Operator>,
    /// Left-hand operand of the pending operation (the running total)
    operand: f64,
    /// Next digit starts a fresh number instead of extending the display
    waiting_for_operand: bool,
    history: History,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator showing `0` with nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: ZERO.to_string(),
            pending: None,
            operand: 0.0,
            waiting_for_operand: false,
            history: History::new(),
        }
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the operator waiting for its right operand, if any
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    /// Returns the running total
    #[must_use]
    pub fn operand(&self) -> f64 {
        self.operand
    }

    /// Returns true when the next digit starts a new number
    #[must_use]
    pub fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    /// Enters a digit. Values above 9 are ignored.
    pub fn input_digit(&mut self, digit: u8) {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        if self.waiting_for_operand {
            self.display = c.to_string();
            self.waiting_for_operand = false;
        } else if self.display == ZERO {
            self.display = c.to_string();
        } else {
            self.display.push(c);
        }
    }

    /// Enters a decimal point; a second point in the same number is ignored
    pub fn input_decimal(&mut self) {
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Enters an operator.
    ///
    /// If another operator is pending and a new operand has been typed, the
    /// pending operation is evaluated first and becomes the running total.
    /// On error nothing is changed.
    pub fn input_operator(&mut self, op: Operator) -> CalcResult<()> {
        let value = self.parse_display()?;

        match self.pending {
            Some(prev) if !self.waiting_for_operand => {
                let result = prev.apply(self.operand, value)?;
                self.display = format_result(result);
                self.operand = result;
            }
            _ => self.operand = value,
        }

        self.waiting_for_operand = true;
        self.pending = Some(op);
        Ok(())
    }

    /// Evaluates the pending operation (the `=` key) and records it in the
    /// history. Does nothing when no operator is pending. On error nothing
    /// is changed.
    pub fn calculate(&mut self) -> CalcResult<()> {
        let value = self.parse_display()?;
        let Some(op) = self.pending else {
            return Ok(());
        };

        let expression = format!("{} {} {}", format_result(self.operand), op, self.display);
        let result = op.apply(self.operand, value)?;

        self.display = format_result(result);
        self.operand = result;
        self.history.record(&expression, &self.display);
        self.pending = None;
        self.waiting_for_operand = true;
        Ok(())
    }

    /// Resets display, pending operator and running total. History is kept.
    pub fn clear(&mut self) {
        self.display = ZERO.to_string();
        self.pending = None;
        self.operand = 0.0;
        self.waiting_for_operand = false;
    }

    /// Removes the last display character, falling back to `0`
    pub fn backspace(&mut self) {
        if self.display.chars().count() > 1 {
            self.display.pop();
        } else {
            self.display = ZERO.to_string();
        }
    }

    /// Returns the calculation history
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Empties the history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Replaces the history, used when restoring saved state
    pub fn set_history(&mut self, entries: Vec<String>) {
        self.history.replace(entries);
    }

    fn parse_display(&self) -> CalcResult<f64> {
        self.display
            .parse::<f64>()
            .map_err(|_| CalcError::InvalidNumber(self.display.clone()))
    }
}
