//! Terminal front-end: a clickable keypad under a right-aligned display

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputAction, InputHandler};
pub use keypad::{Keypad, KeypadWidget};
pub use ui::{render, CalculatorLayout, CalculatorUI, COLUMN_WIDTH, DISPLAY_HEIGHT, KEYPAD_HEIGHT};
