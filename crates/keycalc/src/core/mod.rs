//! Calculator core: operations, tokens, state, and the transition engine
//!
//! Nothing in here knows about terminals or formatting. The engine consumes
//! [`Token`]s and produces fresh [`CalculatorState`] values.

pub mod engine;
mod operations;
pub mod state;
pub mod token;

pub use engine::{apply, CalculatorEngine};
pub use operations::{evaluate, Operation};
pub use state::{CalculatorState, Readout, ERROR_MARKER, MAX_ENTRY_LEN};
pub use token::{Token, UnaryOp};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// `DivisionByZero` and `Overflow` are absorbed by the engine into the error
/// readout; only `UnknownToken` ever reaches a caller.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CalcError {
    /// Division with a zero divisor
    #[error("Division by zero")]
    DivisionByZero,
    /// Result is not a finite number
    #[error("Overflow: result is not a finite number")]
    Overflow,
    /// Label that does not name any calculator button
    #[error("Unknown token: {0:?}")]
    UnknownToken(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError tests =====

    #[test]
    fn test_calc_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_overflow() {
        assert!(CalcError::Overflow.to_string().contains("finite"));
    }

    #[test]
    fn test_calc_error_display_unknown_token() {
        let err = CalcError::UnknownToken("sqrt".into());
        assert_eq!(err.to_string(), "Unknown token: \"sqrt\"");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("Division"));
    }
}
