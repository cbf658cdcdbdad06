//! Output formatting for `eval` and `grid`

use clap::ValueEnum;
use console::style;
use keycalc::core::{CalculatorState, Token};
use keycalc::presentation::{DisplayScale, DisplayView, GridButton, PresentationAdapter, TokenGrid};
use serde::Serialize;

use crate::error::{CliError, CliResult};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Display after one button press
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Canonical label of the pressed button
    pub token: String,
    /// Formatted display afterwards
    pub display: String,
}

/// Result of pressing a token sequence
#[derive(Debug, Clone, Serialize)]
pub struct EvalReport {
    /// Canonical labels pressed, in order
    pub tokens: Vec<String>,
    /// Formatted display
    pub display: String,
    /// Display size tier
    pub scale: DisplayScale,
    /// Whether the display shows the error marker
    pub error: bool,
    /// Final engine state
    pub state: CalculatorState,
    /// Per-press displays, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
}

impl EvalReport {
    /// Parses every label, then presses them in order.
    ///
    /// A bad label fails the whole run before anything is pressed.
    pub fn run<S: AsRef<str>>(labels: &[S], record_steps: bool) -> CliResult<Self> {
        let tokens = labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                label.parse::<Token>().map_err(|_| {
                    CliError::invalid_argument(format!("unknown button label {label:?}"))
                })
            })
            .collect::<CliResult<Vec<_>>>()?;

        let mut adapter = PresentationAdapter::new();
        let mut steps = Vec::with_capacity(tokens.len());
        for token in &tokens {
            adapter.press_token(*token);
            steps.push(Step {
                token: token.label(),
                display: adapter.display_text(),
            });
        }

        let DisplayView {
            text,
            scale,
            error,
        } = adapter.view();

        Ok(Self {
            tokens: tokens.iter().map(Token::label).collect(),
            display: text,
            scale,
            error,
            state: adapter.state().clone(),
            steps: record_steps.then_some(steps),
        })
    }
}

fn styled_display(display: &str, error: bool, use_color: bool) -> String {
    if !use_color {
        return display.to_string();
    }
    if error {
        style(display).red().bold().to_string()
    } else {
        style(display).green().bold().to_string()
    }
}

/// Renders an eval report as text: optional step lines, then the display
#[must_use]
pub fn render_eval_text(report: &EvalReport, use_color: bool) -> String {
    let mut out = String::new();
    if let Some(steps) = &report.steps {
        for step in steps {
            let label = if use_color {
                style(format!("{:>4}", step.token)).cyan().to_string()
            } else {
                format!("{:>4}", step.token)
            };
            out.push_str(&format!("{label}  {}\n", step.display));
        }
    }
    out.push_str(&styled_display(&report.display, report.error, use_color));
    out
}

/// Renders an eval report as pretty JSON
pub fn render_eval_json(report: &EvalReport) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Renders the grid as text rows
#[must_use]
pub fn render_grid_text(grid: &TokenGrid) -> String {
    grid.to_text().join("\n")
}

/// Renders the grid buttons as pretty JSON
pub fn render_grid_json(grid: &TokenGrid) -> CliResult<String> {
    let buttons: Vec<&GridButton> = grid.buttons().collect();
    Ok(serde_json::to_string_pretty(&buttons)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    // ===== EvalReport =====

    #[test]
    fn test_eval_basic() {
        let report = EvalReport::run(&["7", "+", "3", "="], false).unwrap();
        assert_eq!(report.display, "10");
        assert!(!report.error);
        assert_eq!(report.scale, DisplayScale::Large);
        assert!(report.steps.is_none());
    }

    #[test]
    fn test_eval_aliases_are_canonicalised() {
        let report = EvalReport::run(&["6", "*", "7", "="], false).unwrap();
        assert_eq!(report.display, "42");
        assert_eq!(report.tokens, vec!["6", "×", "7", "="]);
    }

    #[test]
    fn test_eval_unknown_label_rejected() {
        let err = EvalReport::run(&["7", "sqrt"], false).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { .. }));
        assert!(err.to_string().contains("sqrt"));
    }

    #[test]
    fn test_eval_error_state() {
        let report = EvalReport::run(&["5", "÷", "0", "="], false).unwrap();
        assert!(report.error);
        assert_eq!(report.display, "Error");
    }

    #[test]
    fn test_eval_steps() {
        let report = EvalReport::run(&["1", "2", ".", "5", "%"], true).unwrap();
        let steps = report.steps.unwrap();
        let displays: Vec<&str> = steps.iter().map(|s| s.display.as_str()).collect();
        assert_eq!(displays, vec!["1", "12", "12.", "12.5", "0.125"]);
    }

    #[test]
    fn test_eval_empty_sequence() {
        let empty: [&str; 0] = [];
        let report = EvalReport::run(&empty, false).unwrap();
        assert_eq!(report.display, "0");
    }

    // ===== Text rendering =====

    #[test]
    fn test_render_text_plain() {
        let report = EvalReport::run(&["9", "-", "1", "2", "="], false).unwrap();
        assert_eq!(render_eval_text(&report, false), "-3");
    }

    #[test]
    fn test_render_text_steps() {
        let report = EvalReport::run(&["4", "×", "5", "="], true).unwrap();
        let text = render_eval_text(&report, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "   4  4");
        assert_eq!(lines[1], "   ×  4");
        assert_eq!(lines[4], "20");
    }

    // ===== JSON rendering =====

    #[test]
    fn test_render_json() {
        let report = EvalReport::run(&["7", "+", "3", "="], false).unwrap();
        let json = render_eval_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["display"], "10");
        assert_eq!(value["scale"], "large");
        assert_eq!(value["error"], false);
        assert!(value.get("steps").is_none());
    }

    #[test]
    fn test_render_json_with_steps() {
        let report = EvalReport::run(&["8"], true).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&render_eval_json(&report).unwrap()).unwrap();
        assert_eq!(value["steps"][0]["token"], "8");
        assert_eq!(value["steps"][0]["display"], "8");
    }

    // ===== Grid rendering =====

    #[test]
    fn test_render_grid_text() {
        let text = render_grid_text(&TokenGrid::new());
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().next().unwrap().contains("AC"));
    }

    #[test]
    fn test_render_grid_json() {
        let json = render_grid_json(&TokenGrid::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 19);
        assert_eq!(value[0]["kind"], "function");
    }
}
