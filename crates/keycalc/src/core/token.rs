//! Button-press tokens and label parsing

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, Operation};

/// Single-operand transforms applied to the entry in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Sign toggle (+/-)
    Negate,
    /// Divide by one hundred (%)
    Percent,
}

impl UnaryOp {
    /// Returns the button label
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Negate => "+/-",
            Self::Percent => "%",
        }
    }

    /// Applies the transform to `value`
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Negate => value * -1.0,
            Self::Percent => value / 100.0,
        }
    }
}

/// One user input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    DecimalPoint,
    /// All clear (AC)
    Clear,
    /// Sign toggle or percent
    Unary(UnaryOp),
    /// One of the four binary operators
    Binary(Operation),
    /// Evaluate the pending operation
    Equals,
}

impl Token {
    /// Every distinct token, digits first
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut tokens: Vec<Self> = (0..=9).map(Self::Digit).collect();
        tokens.extend([
            Self::DecimalPoint,
            Self::Clear,
            Self::Unary(UnaryOp::Negate),
            Self::Unary(UnaryOp::Percent),
        ]);
        tokens.extend(Operation::ALL.map(Self::Binary));
        tokens.push(Self::Equals);
        tokens
    }

    /// Returns the canonical button label for this token
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::DecimalPoint => ".".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Unary(op) => op.symbol().to_string(),
            Self::Binary(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Token {
    type Err = CalcError;

    /// Parses a button label. Besides the canonical labels, `*`/`x`, `/`, and
    /// the minus sign U+2212 are accepted for the operators that are awkward
    /// to type.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let token = match label {
            "." => Self::DecimalPoint,
            "AC" => Self::Clear,
            "+/-" => Self::Unary(UnaryOp::Negate),
            "%" => Self::Unary(UnaryOp::Percent),
            "+" => Self::Binary(Operation::Add),
            "-" | "\u{2212}" => Self::Binary(Operation::Subtract),
            "×" | "*" | "x" => Self::Binary(Operation::Multiply),
            "÷" | "/" => Self::Binary(Operation::Divide),
            "=" => Self::Equals,
            _ => match label.as_bytes() {
                [b @ b'0'..=b'9'] => Self::Digit(b - b'0'),
                _ => return Err(CalcError::UnknownToken(label.to_string())),
            },
        };
        Ok(token)
    }
}
