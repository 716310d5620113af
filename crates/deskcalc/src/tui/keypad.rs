//! Keypad grid for the terminal calculator
//!
//! ```text
//! [ C ] [ ← ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ . ] [ = ]
//! ```
//!
//! Buttons can be clicked with the mouse, and the button matching the last
//! key press is highlighted.

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use super::theme::Palette;
use crate::core::{Input, Operator};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// What the button does; `None` for the blank cell
    pub action: Option<Input>,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a button for `input`
    #[must_use]
    pub fn new(input: Input) -> Self {
        Self {
            action: Some(input),
            pressed: false,
        }
    }

    /// Creates an empty cell
    #[must_use]
    pub fn blank() -> Self {
        Self {
            action: None,
            pressed: false,
        }
    }

    /// Label shown on the button (empty for the blank cell)
    #[must_use]
    pub fn label(&self) -> String {
        self.action.map(|a| a.label()).unwrap_or_default()
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

const ROWS: usize = 5;
const COLS: usize = 4;

/// The 5x4 keypad layout
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use crate::core::Input::{Backspace, Clear, Decimal, Digit, Equals};
        let op = |o| KeypadButton::new(Input::Operator(o));
        let key = KeypadButton::new;

        let buttons = vec![
            key(Clear),
            key(Backspace),
            op(Operator::Modulo),
            op(Operator::Divide),
            key(Digit(7)),
            key(Digit(8)),
            key(Digit(9)),
            op(Operator::Multiply),
            key(Digit(4)),
            key(Digit(5)),
            key(Digit(6)),
            op(Operator::Subtract),
            key(Digit(1)),
            key(Digit(2)),
            key(Digit(3)),
            op(Operator::Add),
            key(Digit(0)),
            key(Decimal),
            key(Equals),
            KeypadButton::blank(),
        ];

        Self { buttons }
    }

    /// Returns all cells in row-major order, blank included
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Returns one keypad row, left to right
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[KeypadButton]> {
        self.buttons.chunks(COLS).nth(row)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Finds the button performing `input`
    #[must_use]
    pub fn find_button(&self, input: Input) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == Some(input))
    }

    /// Returns the index of the highlighted button
    #[must_use]
    pub fn pressed_index(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.pressed)
    }

    /// Clears the highlight
    pub fn release_all(&mut self) {
        self.buttons.iter_mut().for_each(|b| b.set_pressed(false));
    }

    /// Highlights the button for `input`, releasing any other
    pub fn highlight(&mut self, input: Input) {
        for btn in &mut self.buttons {
            btn.set_pressed(btn.action == Some(input));
        }
    }

    /// Maps a click inside the bordered `area` to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let grid = Grid::inside(area)?;
        let col = usize::from(x.checked_sub(grid.inner.x)? / grid.cell_width);
        let row = usize::from(y.checked_sub(grid.inner.y)? / grid.cell_height);
        let inside = x < grid.inner.right() && y < grid.inner.bottom();
        (inside && row < ROWS && col < COLS).then_some(row * COLS + col)
    }
}

/// Cell geometry of the keypad inside its border
#[derive(Debug, Clone, Copy)]
struct Grid {
    inner: Rect,
    cell_width: u16,
    cell_height: u16,
}

impl Grid {
    /// `None` when the area cannot fit one cell per button
    fn inside(area: Rect) -> Option<Self> {
        let inner = area.inner(Margin::new(1, 1));
        let cell_width = inner.width / COLS as u16;
        let cell_height = inner.height / ROWS as u16;
        (cell_width > 0 && cell_height > 0).then_some(Self {
            inner,
            cell_width,
            cell_height,
        })
    }

    fn cell(&self, index: usize) -> Rect {
        let (row, col) = ((index / COLS) as u16, (index % COLS) as u16);
        Rect::new(
            self.inner.x + col * self.cell_width,
            self.inner.y + row * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }
}

/// Draws a [`Keypad`] in a bordered block
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    palette: Palette,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a keypad widget drawn with `palette`
    #[must_use]
    pub fn new(keypad: &'a Keypad, palette: Palette) -> Self {
        Self { keypad, palette }
    }

    fn style(&self, btn: &KeypadButton, action: Input) -> Style {
        let p = self.palette;
        if btn.pressed {
            return Style::default()
                .fg(p.background)
                .bg(p.highlight)
                .add_modifier(Modifier::BOLD);
        }
        let fg = match action {
            Input::Digit(_) | Input::Decimal => p.text,
            Input::Operator(_) => p.operator,
            Input::Equals => p.equals,
            Input::Clear | Input::Backspace => p.danger,
        };
        Style::default().fg(fg).bg(p.background)
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.border).bg(p.background))
            .style(Style::default().bg(p.background))
            .render(area, buf);

        let Some(grid) = Grid::inside(area) else {
            return;
        };
        // Labels need room for the brackets
        if grid.cell_width < 3 {
            return;
        }

        for (index, btn) in self.keypad.buttons().iter().enumerate() {
            let Some(action) = btn.action else {
                continue;
            };
            let cell = grid.cell(index);
            let label = format!("[{}]", action.label());
            let width = label.chars().count() as u16;
            let x = cell.x + cell.width.saturating_sub(width) / 2;
            let y = cell.y + cell.height / 2;
            buf.set_span(x, y, &Span::styled(label, self.style(btn, action)), cell.width);
        }
    }
}
