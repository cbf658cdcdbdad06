//! Front-end independent driver
//!
//! Any front-end that can press a labelled button and report what the
//! display shows implements [`CalculatorDriver`]. The `verify_*` functions
//! are scenario checks written once and run against every driver.

use crate::core::{CalcResult, CalculatorState, ERROR_MARKER};
use crate::presentation::PresentationAdapter;

/// Abstract driver for button-press interactions
pub trait CalculatorDriver {
    /// Presses the button with `label`
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// Formatted text currently on the display
    fn display_text(&self) -> String;

    /// Snapshot of the engine state
    fn state(&self) -> CalculatorState;

    /// Presses each label in order
    fn press_sequence(&mut self, labels: &[&str]) -> CalcResult<()> {
        for label in labels {
            self.press(label)?;
        }
        Ok(())
    }

    /// Presses AC
    fn clear(&mut self) -> CalcResult<()> {
        self.press("AC")
    }
}

impl CalculatorDriver for PresentationAdapter {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        Self::press(self, label).map(|_| ())
    }

    fn display_text(&self) -> String {
        Self::display_text(self)
    }

    fn state(&self) -> CalculatorState {
        Self::state(self).clone()
    }
}

/// TUI driver: presses go through the keypad, as a mouse click would
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::{CalcError, CalcResult, CalculatorState, Token};
    use crate::tui::CalculatorApp;

    /// Drives a [`CalculatorApp`] by button index
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, label: &str) -> CalcResult<()> {
            let token: Token = label.parse()?;
            let index = self
                .app
                .keypad()
                .grid()
                .find(token)
                .ok_or_else(|| CalcError::UnknownToken(label.to_string()))?;
            self.app.press_button(index);
            Ok(())
        }

        fn display_text(&self) -> String {
            self.app.view().text
        }

        fn state(&self) -> CalculatorState {
            self.app.state().clone()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared scenario checks =====

/// `7 + 3 =` and friends
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press_sequence(&["7", "+", "3", "="])?;
    assert_eq!(driver.display_text(), "10");
    driver.clear()?;

    driver.press_sequence(&["9", "-", "1", "2", "="])?;
    assert_eq!(driver.display_text(), "-3");
    driver.clear()?;

    driver.press_sequence(&["6", "×", "7", "="])?;
    assert_eq!(driver.display_text(), "42");
    driver.clear()?;

    driver.press_sequence(&["2", "0", "÷", "8", "="])?;
    assert_eq!(driver.display_text(), "2.5");
    driver.clear()
}

/// `5 ÷ 0 =` shows the error marker and the next digit starts over
pub fn verify_divide_by_zero_recovery<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press_sequence(&["5", "÷", "0", "="])?;
    assert_eq!(driver.display_text(), ERROR_MARKER);
    assert!(driver.state().is_error());

    driver.press("9")?;
    assert_eq!(driver.display_text(), "9");
    let state = driver.state();
    assert!(!state.awaiting_operand());
    assert_eq!(state.accumulator(), None);
    assert_eq!(state.pending_operator(), None);
    driver.clear()
}

/// `1 2 . 5 %` gives 0.125
pub fn verify_percent<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press_sequence(&["1", "2", ".", "5", "%"])?;
    assert_eq!(driver.display_text(), "0.125");
    driver.clear()
}

/// `4 × × 5 =` gives 20; the second × changes nothing
pub fn verify_repeated_operator<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press_sequence(&["4", "×"])?;
    let once = driver.state();
    driver.press("×")?;
    assert_eq!(driver.state().accumulator(), once.accumulator());

    driver.press_sequence(&["5", "="])?;
    assert_eq!(driver.display_text(), "20");
    driver.clear()
}

/// `9 +` then `+/-` leaves the display alone
pub fn verify_unary_guard<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press_sequence(&["9", "+"])?;
    let before = driver.state();
    driver.press("+/-")?;
    assert_eq!(driver.state(), before);
    assert_eq!(driver.display_text(), "9");
    driver.clear()
}

/// Thousands separators, rounding, and the trailing point
pub fn verify_formatting<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.press_sequence(&["1", "2", "3", "4", "5", "6", "7"])?;
    assert_eq!(driver.display_text(), "1,234,567");
    driver.press(".")?;
    assert_eq!(driver.display_text(), "1234567.");
    driver.clear()?;

    driver.press_sequence(&["2", "÷", "3", "="])?;
    assert_eq!(driver.display_text(), "0.66666667");
    driver.clear()
}

/// Runs every scenario above
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_basic_arithmetic(driver)?;
    verify_divide_by_zero_recovery(driver)?;
    verify_percent(driver)?;
    verify_repeated_operator(driver)?;
    verify_unary_guard(driver)?;
    verify_formatting(driver)
}
