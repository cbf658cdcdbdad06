//! Token-driven state machine
//!
//! [`apply`] is a total function: every `(state, token)` pair yields a valid
//! state, and malformed sequences (an operator with nothing entered, equals
//! with nothing pending) simply leave the state unchanged.

use tracing::{debug, trace};

use crate::core::state::stringify;
use crate::core::{
    evaluate, CalcError, CalcResult, CalculatorState, Operation, Token, UnaryOp, MAX_ENTRY_LEN,
};

/// Produces the state that follows `state` after `token` is pressed
#[must_use]
pub fn apply(state: &CalculatorState, token: Token) -> CalculatorState {
    trace!(%token, display = state.display(), "applying token");
    match token {
        Token::Digit(d) => input_digit(state, d),
        Token::DecimalPoint => input_decimal(state),
        Token::Clear => CalculatorState::initial(),
        Token::Unary(op) => apply_unary(state, op),
        Token::Binary(op) => apply_operator(state, op),
        Token::Equals => apply_equals(state),
    }
}

fn input_digit(state: &CalculatorState, digit: u8) -> CalculatorState {
    if digit > 9 {
        debug!(digit, "ignoring out-of-range digit");
        return state.clone();
    }
    let digit = char::from(b'0' + digit);

    let current = match state.entry() {
        // Leaving the error state also drops whatever was pending
        None => {
            return CalculatorState::initial().with_entry(digit.to_string(), false);
        }
        Some(_) if state.awaiting_operand() => {
            return state.with_entry(digit.to_string(), false);
        }
        Some(current) => current,
    };

    if current.len() >= MAX_ENTRY_LEN {
        return state.clone();
    }

    let next = if current == "0" {
        digit.to_string()
    } else {
        format!("{current}{digit}")
    };
    state.with_entry(next, false)
}

fn input_decimal(state: &CalculatorState) -> CalculatorState {
    match state.entry() {
        Some(current) if !current.contains('.') => state.with_entry(format!("{current}."), false),
        _ => state.clone(),
    }
}

fn apply_unary(state: &CalculatorState, op: UnaryOp) -> CalculatorState {
    if state.awaiting_operand() {
        return state.clone();
    }
    match state.current_value() {
        Some(value) => state.with_entry(stringify(op.apply(value)), false),
        None => state.clone(),
    }
}

fn apply_operator(state: &CalculatorState, op: Operation) -> CalculatorState {
    let Some(current) = state.current_value() else {
        return state.clone();
    };

    match (state.accumulator(), state.pending_operator()) {
        (Some(acc), Some(pending)) if !state.awaiting_operand() => {
            match evaluate(acc, current, pending) {
                Ok(result) => state
                    .with_entry(stringify(result), true)
                    .with_operation(Some(result), Some(op), true),
                Err(err) => fail(err),
            }
        }
        // Repeated operator press: keep the committed operand, swap the operator
        (Some(acc), Some(_)) => state.with_operation(Some(acc), Some(op), true),
        _ => state.with_operation(Some(current), Some(op), true),
    }
}

fn apply_equals(state: &CalculatorState) -> CalculatorState {
    let (Some(acc), Some(pending)) = (state.accumulator(), state.pending_operator()) else {
        return state.clone();
    };
    let Some(current) = state.current_value() else {
        return state.clone();
    };

    match evaluate(acc, current, pending) {
        Ok(result) => state
            .with_entry(stringify(result), true)
            .with_operation(None, None, true),
        Err(err) => fail(err),
    }
}

fn fail(error: CalcError) -> CalculatorState {
    debug!(%error, "calculation failed, showing error marker");
    CalculatorState::failed(error)
}

/// Owns the current state and replaces it wholesale on every press
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
}

impl CalculatorEngine {
    /// Creates an engine in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Applies a token and returns the new state
    pub fn press(&mut self, token: Token) -> &CalculatorState {
        self.state = apply(&self.state, token);
        &self.state
    }

    /// Parses `label` and applies it. Unknown labels leave the state untouched.
    pub fn press_label(&mut self, label: &str) -> CalcResult<&CalculatorState> {
        let token = label.parse::<Token>().inspect_err(|err| {
            debug!(%err, "rejected button label");
        })?;
        Ok(self.press(token))
    }

    /// Applies every token in order and returns the final state
    pub fn press_all<I>(&mut self, tokens: I) -> &CalculatorState
    where
        I: IntoIterator<Item = Token>,
    {
        for token in tokens {
            self.state = apply(&self.state, token);
        }
        &self.state
    }
}
