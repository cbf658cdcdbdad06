//! Calculator state value
//!
//! A [`CalculatorState`] is never mutated once handed out. The engine builds
//! a fresh value for every token, so an old state can be kept around and
//! compared against freely.

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, Operation};

/// Text shown while the calculator is in the error state
pub const ERROR_MARKER: &str = "Error";

/// Longest entry, in characters, that digits may still be appended to
pub const MAX_ENTRY_LEN: usize = 10;

/// What the display currently holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Readout {
    /// A numeral under construction or a stringified result
    Number(String),
    /// A failed calculation; shown as [`ERROR_MARKER`]
    Error(CalcError),
}

impl Readout {
    /// Returns the raw display text
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Number(text) => text,
            Self::Error(_) => ERROR_MARKER,
        }
    }
}

/// Complete calculator state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    readout: Readout,
    accumulator: Option<f64>,
    pending_operator: Option<Operation>,
    awaiting_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::initial()
    }
}

impl CalculatorState {
    /// The power-on state: display "0", nothing pending
    #[must_use]
    pub fn initial() -> Self {
        Self {
            readout: Readout::Number("0".to_string()),
            accumulator: None,
            pending_operator: None,
            awaiting_operand: true,
        }
    }

    /// The error state reached from a failed calculation
    #[must_use]
    pub(crate) fn failed(error: CalcError) -> Self {
        Self {
            readout: Readout::Error(error),
            accumulator: None,
            pending_operator: None,
            awaiting_operand: true,
        }
    }

    /// Raw display text (the error marker while in the error state)
    #[must_use]
    pub fn display(&self) -> &str {
        self.readout.as_str()
    }

    /// The display contents with the reason for an error, if any
    #[must_use]
    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    /// The committed left-hand operand
    #[must_use]
    pub fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    /// The operator waiting for its right-hand operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operation> {
        self.pending_operator
    }

    /// True when the next digit starts a new number
    #[must_use]
    pub fn awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    /// True while the error marker is shown
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.readout, Readout::Error(_))
    }

    /// Numeric value of the display, `None` in the error state
    #[must_use]
    pub fn current_value(&self) -> Option<f64> {
        match &self.readout {
            Readout::Number(text) => text.parse::<f64>().ok().filter(|v| v.is_finite()),
            Readout::Error(_) => None,
        }
    }

    pub(crate) fn entry(&self) -> Option<&str> {
        match &self.readout {
            Readout::Number(text) => Some(text),
            Readout::Error(_) => None,
        }
    }

    pub(crate) fn with_entry(&self, text: String, awaiting_operand: bool) -> Self {
        Self {
            readout: Readout::Number(text),
            awaiting_operand,
            ..self.clone()
        }
    }

    pub(crate) fn with_operation(
        &self,
        accumulator: Option<f64>,
        pending_operator: Option<Operation>,
        awaiting_operand: bool,
    ) -> Self {
        Self {
            readout: self.readout.clone(),
            accumulator,
            pending_operator,
            awaiting_operand,
        }
    }
}

/// Writes a computed value back as display text.
///
/// Uses the shortest representation that parses back to the same `f64`,
/// and never produces a negative zero.
#[must_use]
pub fn stringify(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
