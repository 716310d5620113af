//! Keypad input events and keystroke scripts

use crate::core::{CalcResult, Calculator, Operator};

/// One discrete keypad event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// A digit key (0-9)
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// An operator key
    Operator(Operator),
    /// The `=` key
    Equals,
    /// The `C` key
    Clear,
    /// The `←` key
    Backspace,
}

impl Input {
    /// Maps a keystroke character to an input.
    ///
    /// Besides the keypad labels this accepts `*`, `x`, `/` for the
    /// operators, `c` for clear and `<` for backspace.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }
        match c {
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            'C' | 'c' => Some(Self::Clear),
            '←' | '<' => Some(Self::Backspace),
            _ => Operator::from_char(c).map(Self::Operator),
        }
    }

    /// Label shown on the keypad button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".into(),
            Self::Operator(op) => op.symbol().into(),
            Self::Equals => "=".into(),
            Self::Clear => "C".into(),
            Self::Backspace => "←".into(),
        }
    }
}

/// A keystroke script contained a character that is not a key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key {key:?} at position {position}")]
pub struct UnknownKey {
    /// The offending character
    pub key: char,
    /// Character index in the script
    pub position: usize,
}

/// Parses a keystroke script such as `"12.5 × 4 ="`. Whitespace is ignored.
pub fn parse_script(script: &str) -> Result<Vec<Input>, UnknownKey> {
    script
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(position, key)| Input::from_char(key).ok_or(UnknownKey { key, position }))
        .collect()
}

impl Calculator {
    /// Dispatches one keypad event
    pub fn press(&mut self, input: Input) -> CalcResult<()> {
        match input {
            Input::Digit(d) => self.input_digit(d),
            Input::Decimal => self.input_decimal(),
            Input::Operator(op) => return self.input_operator(op),
            Input::Equals => return self.calculate(),
            Input::Clear => self.clear(),
            Input::Backspace => self.backspace(),
        }
        Ok(())
    }
}
