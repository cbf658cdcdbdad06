//! Binary operators and their evaluation

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// The four operators a pending operation can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operation {
    /// All operators in keypad order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the button label for this operator
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Applies `op` to `a` and `b`.
///
/// Every division passes the zero-divisor guard, and any result that is not
/// finite is rejected, so a successful value can always be written back to
/// the display.
pub fn evaluate(a: f64, b: f64, op: Operation) -> CalcResult<f64> {
    let result = match op {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::Overflow)
    }
}
