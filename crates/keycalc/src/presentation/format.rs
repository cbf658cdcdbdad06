//! Display text formatting and sizing

use serde::{Deserialize, Serialize};

use crate::core::{CalculatorState, ERROR_MARKER};

/// Most fractional digits shown in a formatted number
pub const MAX_FRACTION_DIGITS: usize = 8;

/// Renders the state's display the way the calculator screen shows it.
///
/// Numbers get thousands separators and are rounded to
/// [`MAX_FRACTION_DIGITS`]. An entry that ends in a decimal point is shown
/// raw while it is still being typed, so the point does not vanish.
#[must_use]
pub fn format_display(state: &CalculatorState) -> String {
    if state.is_error() {
        return ERROR_MARKER.to_string();
    }

    let raw = state.display();
    if raw.ends_with('.') && !state.awaiting_operand() {
        return raw.to_string();
    }

    state
        .current_value()
        .map_or_else(|| raw.to_string(), format_number)
}

/// Formats a finite number in en-US style: `-1,234,567.125`
///
/// Starts from the shortest round-trip digits of `value`, so no digit
/// appears that the raw display does not have, then rounds half-up to
/// [`MAX_FRACTION_DIGITS`].
#[must_use]
pub fn format_number(value: f64) -> String {
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let (int_part, frac_part) = round_half_up(int_part, frac_part, MAX_FRACTION_DIGITS);
    let frac_part = frac_part.trim_end_matches('0');

    let rounds_to_zero = frac_part.is_empty() && int_part.bytes().all(|b| b == b'0');

    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + frac_part.len() + 2);
    if value.is_sign_negative() && !rounds_to_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(&int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Cuts a decimal digit string to `places` fraction digits, rounding half-up
fn round_half_up(int_part: &str, frac_part: &str, places: usize) -> (String, String) {
    if frac_part.len() <= places {
        return (int_part.to_string(), frac_part.to_string());
    }

    let round_up = frac_part.as_bytes().get(places).is_some_and(|b| *b >= b'5');
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(places))
        .collect();

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (int_digits, frac_digits) = digits.split_at(digits.len() - places);
    (
        int_digits.iter().map(|b| char::from(*b)).collect(),
        frac_digits.iter().map(|b| char::from(*b)).collect(),
    )
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Size tier for the display text, shrinking as the entry grows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayScale {
    /// Up to 6 characters
    Large,
    /// 7 to 9 characters
    Medium,
    /// 10 characters or more
    Small,
}

impl DisplayScale {
    /// Picks the tier for a raw display string
    #[must_use]
    pub fn for_display(display: &str) -> Self {
        match display.chars().count() {
            len if len > 9 => Self::Small,
            len if len > 6 => Self::Medium,
            _ => Self::Large,
        }
    }
}

/// Everything a front-end needs to draw the display panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayView {
    /// Formatted display text
    pub text: String,
    /// Size tier
    pub scale: DisplayScale,
    /// Whether the error marker is shown
    pub error: bool,
}

impl DisplayView {
    /// Builds the view for `state`
    #[must_use]
    pub fn of(state: &CalculatorState) -> Self {
        Self {
            text: format_display(state),
            scale: DisplayScale::for_display(state.display()),
            error: state.is_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalculatorEngine, Token};

    fn state_after(labels: &[&str]) -> CalculatorState {
        let mut engine = CalculatorEngine::new();
        for label in labels {
            engine.press_label(label).unwrap();
        }
        engine.state().clone()
    }

    // ===== format_number =====

    #[test]
    fn test_format_small_integer() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(999.0), "999");
    }

    #[test]
    fn test_format_thousands_separators() {
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.0), "1,234,567");
        assert_eq!(format_number(123456789.0), "123,456,789");
    }

    #[test]
    fn test_format_fraction() {
        assert_eq!(format_number(0.125), "0.125");
        assert_eq!(format_number(1234.5), "1,234.5");
    }

    #[test]
    fn test_format_rounds_to_eight_digits() {
        assert_eq!(format_number(1.0 / 3.0), "0.33333333");
        assert_eq!(format_number(2.0 / 3.0), "0.66666667");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_number(-1234.5), "-1,234.5");
        assert_eq!(format_number(-9.0), "-9");
    }

    #[test]
    fn test_format_large_product_uses_display_digits() {
        let state = state_after(&[
            "9", "9", "9", "9", "9", "9", "9", "9", "9", "9", "×",
            "9", "9", "9", "9", "9", "9", "9", "9", "9", "9", "=",
        ]);
        assert_eq!(state.display(), "99999999980000000000");
        assert_eq!(format_display(&state), "99,999,999,980,000,000,000");
    }

    #[test]
    fn test_format_rounds_ties_up() {
        let state = state_after(&["1", "÷", "5", "1", "2", "="]);
        assert_eq!(state.display(), "0.001953125");
        assert_eq!(format_display(&state), "0.00195313");
        assert_eq!(format_number(-0.001953125), "-0.00195313");
    }

    #[test]
    fn test_format_rounding_carries_into_integer() {
        assert_eq!(format_number(999.999999999), "1,000");
        assert_eq!(format_number(0.999999999), "1");
    }

    #[test]
    fn test_format_tiny_values_round_to_zero() {
        assert_eq!(format_number(1e-9), "0");
        assert_eq!(format_number(-1e-9), "0");
    }

    // ===== format_display =====

    #[test]
    fn test_format_display_initial() {
        assert_eq!(format_display(&CalculatorState::initial()), "0");
    }

    #[test]
    fn test_format_display_error() {
        assert_eq!(format_display(&state_after(&["5", "÷", "0", "="])), "Error");
    }

    #[test]
    fn test_format_display_keeps_trailing_point_while_typing() {
        assert_eq!(format_display(&state_after(&["1", "2", "3", "4", "."])), "1234.");
    }

    #[test]
    fn test_format_display_drops_trailing_point_once_committed() {
        let state = state_after(&["5", ".", "+"]);
        assert_eq!(state.display(), "5.");
        assert!(state.awaiting_operand());
        assert_eq!(format_display(&state), "5");
    }

    #[test]
    fn test_format_display_point_after_result() {
        let state = state_after(&["7", "+", "3", "=", "."]);
        assert_eq!(state.display(), "10.");
        assert_eq!(format_display(&state), "10.");
    }

    #[test]
    fn test_format_display_groups_entry() {
        assert_eq!(format_display(&state_after(&["1", "2", "3", "4", "5"])), "12,345");
    }

    #[test]
    fn test_format_display_drops_typed_trailing_zero() {
        // Only a trailing point is preserved; "1.0" shows as its value
        assert_eq!(format_display(&state_after(&["1", ".", "0"])), "1");
    }

    #[test]
    fn test_format_display_result() {
        assert_eq!(
            format_display(&state_after(&["1", "0", "0", "0", "×", "3", "="])),
            "3,000"
        );
    }

    // ===== DisplayScale =====

    #[test]
    fn test_scale_tiers() {
        assert_eq!(DisplayScale::for_display("0"), DisplayScale::Large);
        assert_eq!(DisplayScale::for_display("123456"), DisplayScale::Large);
        assert_eq!(DisplayScale::for_display("1234567"), DisplayScale::Medium);
        assert_eq!(DisplayScale::for_display("123456789"), DisplayScale::Medium);
        assert_eq!(DisplayScale::for_display("1234567890"), DisplayScale::Small);
    }

    #[test]
    fn test_scale_uses_raw_length_not_formatted() {
        // "123456" formats as "123,456" but stays in the large tier
        let mut engine = CalculatorEngine::new();
        engine.press_all((1..=6).map(Token::Digit));
        let view = DisplayView::of(engine.state());
        assert_eq!(view.text, "123,456");
        assert_eq!(view.scale, DisplayScale::Large);
    }

    // ===== DisplayView =====

    #[test]
    fn test_display_view_error_flag() {
        let view = DisplayView::of(&state_after(&["1", "÷", "0", "="]));
        assert!(view.error);
        assert_eq!(view.text, ERROR_MARKER);
        assert_eq!(view.scale, DisplayScale::Large);
    }
}
