//! Colour palettes for the light and dark themes

use ratatui::style::Color;

use crate::config::Theme;

/// Colours used by every widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Widget background
    pub background: Color,
    /// Digits and display text
    pub text: Color,
    /// Secondary text
    pub muted: Color,
    /// Block borders
    pub border: Color,
    /// Operator keys
    pub operator: Color,
    /// The `=` key
    pub equals: Color,
    /// Clear, backspace and errors
    pub danger: Color,
    /// Pressed button
    pub highlight: Color,
}

impl Palette {
    /// Returns the palette for `theme`
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::DarkGray,
                border: Color::Blue,
                operator: Color::Magenta,
                equals: Color::Green,
                danger: Color::Red,
                highlight: Color::Blue,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::Gray,
                border: Color::Cyan,
                operator: Color::Yellow,
                equals: Color::Green,
                danger: Color::Red,
                highlight: Color::Yellow,
            },
        }
    }
}
