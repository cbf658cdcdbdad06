//! TUI application state

use crate::core::CalculatorState;
use crate::presentation::{format_number, DisplayView, PresentationAdapter};

use super::input::InputAction;
use super::keypad::Keypad;

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    /// Engine plus formatting
    adapter: PresentationAdapter,
    /// Clickable keypad and its highlight
    keypad: Keypad,
    /// Whether the app should quit
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app showing "0"
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the presentation adapter
    #[must_use]
    pub fn adapter(&self) -> &PresentationAdapter {
        &self.adapter
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the engine state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        self.adapter.state()
    }

    /// Formatted display, scale, and error flag
    #[must_use]
    pub fn view(&self) -> DisplayView {
        self.adapter.view()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses the keypad button at `index` and lights it.
    ///
    /// Returns false if there is no such button.
    pub fn press_button(&mut self, index: usize) -> bool {
        if self.adapter.press_button(index).is_none() {
            return false;
        }
        self.keypad.press_button(index);
        true
    }

    /// Applies an input action
    pub fn handle_action(&mut self, action: InputAction) {
        match action {
            InputAction::Press(index) => {
                self.press_button(index);
            }
            InputAction::Release => self.keypad.release_all(),
            InputAction::Quit => self.quit(),
            InputAction::None => {}
        }
    }

    /// Pending operation line, e.g. "12 ×", or empty if none
    #[must_use]
    pub fn pending_summary(&self) -> String {
        let state = self.state();
        match (state.accumulator(), state.pending_operator()) {
            (Some(acc), Some(op)) => format!("{} {}", format_number(acc), op),
            _ => String::new(),
        }
    }
}
