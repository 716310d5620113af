//! Binary operators and their arithmetic

use crate::core::{CalcError, CalcResult};

/// Operator keys on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
    /// Integer remainder (%)
    Modulo,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
    ];

    /// Returns the operator symbol as shown on the keypad and in history
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Modulo => "%",
        }
    }

    /// Parses a keypad symbol. `*`, `x` and `/` are accepted as keyboard
    /// aliases for `×` and `÷`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "×" | "*" | "x" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            "%" => Some(Self::Modulo),
            _ => None,
        }
    }

    /// Same as [`Operator::from_symbol`] for a single key character
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let mut buf = [0u8; 4];
        Self::from_symbol(c.encode_utf8(&mut buf))
    }

    /// Applies the operator to `a` (left) and `b` (right).
    ///
    /// `%` truncates both operands toward zero before taking the remainder,
    /// so `7.9 % 2` is `1`.
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(a / b)
            }
            Self::Modulo => {
                let divisor = b as i64;
                if divisor == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok((a as i64).wrapping_rem(divisor) as f64)
            }
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
