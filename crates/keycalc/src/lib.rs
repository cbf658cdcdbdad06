//! keycalc - a button-press calculator
//!
//! The engine is a pure transition function over an immutable
//! [`CalculatorState`](core::CalculatorState): each press of a labelled
//! button produces a new state. A presentation layer turns that state into
//! display text, picks a size tier, and lays out the button grid. The
//! optional `tui` feature puts a clickable ratatui keypad on top.
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut adapter = PresentationAdapter::new();
//! for label in ["1", "2", "3", "4", "×", "2", "="] {
//!     adapter.press(label).unwrap();
//! }
//! assert_eq!(adapter.display_text(), "2,468");
//!
//! // The engine itself is just a function
//! let state = apply(&CalculatorState::initial(), Token::Digit(7));
//! assert_eq!(state.display(), "7");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod presentation;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        apply, CalcError, CalcResult, CalculatorEngine, CalculatorState, Operation, Readout,
        Token, UnaryOp, ERROR_MARKER,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::presentation::{
        format_display, ButtonKind, DisplayScale, DisplayView, PresentationAdapter, TokenGrid,
    };

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
