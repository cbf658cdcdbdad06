//! Glue between a front-end and the engine

use crate::core::{CalcResult, CalculatorEngine, CalculatorState, Token};
use crate::presentation::{format_display, DisplayScale, DisplayView, TokenGrid};

/// Forwards button labels to the engine and renders the resulting state
#[derive(Debug, Clone, Default)]
pub struct PresentationAdapter {
    engine: CalculatorEngine,
    grid: TokenGrid,
}

impl PresentationAdapter {
    /// Creates an adapter with a fresh engine and the standard grid
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current engine state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        self.engine.state()
    }

    /// Returns the button grid
    #[must_use]
    pub fn grid(&self) -> &TokenGrid {
        &self.grid
    }

    /// Forwards a button label to the engine
    pub fn press(&mut self, label: &str) -> CalcResult<&CalculatorState> {
        self.engine.press_label(label)
    }

    /// Applies an already-parsed token
    pub fn press_token(&mut self, token: Token) -> &CalculatorState {
        self.engine.press(token)
    }

    /// Presses the grid button at `index`, forwarding its label.
    ///
    /// Returns `None` if there is no such button.
    pub fn press_button(&mut self, index: usize) -> Option<&CalculatorState> {
        let label = self.grid.get(index)?.label();
        self.engine.press_label(&label).ok()
    }

    /// Formatted display text
    #[must_use]
    pub fn display_text(&self) -> String {
        format_display(self.state())
    }

    /// Size tier for the current display
    #[must_use]
    pub fn scale(&self) -> DisplayScale {
        DisplayScale::for_display(self.state().display())
    }

    /// Text, scale, and error flag in one value
    #[must_use]
    pub fn view(&self) -> DisplayView {
        DisplayView::of(self.state())
    }
}
