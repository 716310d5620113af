//! Terminal front-end: display, keypad, history tab and dialogs

mod app;
mod input;
mod keypad;
mod theme;
mod ui;

pub use app::{CalculatorApp, Dialog, Tab};
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use theme::Palette;
pub use ui::{layout, render, AppLayout};
