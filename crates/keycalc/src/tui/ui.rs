//! TUI rendering
//!
//! The screen is one centred column: display panel, keypad, help line.
//! [`CalculatorLayout`] is shared by rendering and the event loop so mouse
//! hit-tests use the same keypad rectangle that was drawn.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use crate::presentation::{DisplayScale, DisplayView};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Width of the calculator column
pub const COLUMN_WIDTH: u16 = 34;
/// Height of the display panel, border included
pub const DISPLAY_HEIGHT: u16 = 5;
/// Height of the keypad, border included
pub const KEYPAD_HEIGHT: u16 = 12;

const HELP_TEXT: &str = "click a button · q/Esc quit";

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    /// Display panel
    pub display: Rect,
    /// Keypad block
    pub keypad: Rect,
    /// Help line
    pub help: Rect,
}

impl CalculatorLayout {
    /// Splits `area` into the calculator regions
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let column = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(COLUMN_WIDTH),
                Constraint::Fill(1),
            ])
            .split(area)[1];

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(DISPLAY_HEIGHT),
                Constraint::Length(KEYPAD_HEIGHT),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .split(column);

        Self {
            display: rows[1],
            keypad: rows[2],
            help: rows[3],
        }
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Text style for a display value
    #[must_use]
    pub fn display_style(view: &DisplayView) -> Style {
        if view.error {
            return Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
        }
        let base = Style::default().fg(Color::Green);
        match view.scale {
            DisplayScale::Large => base.add_modifier(Modifier::BOLD),
            DisplayScale::Medium => base,
            DisplayScale::Small => base.add_modifier(Modifier::DIM),
        }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let view = self.app.view();
        let style = Self::display_style(&view);

        let lines = vec![
            Line::from(Span::styled(
                self.app.pending_summary(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
            Line::from(Span::styled(view.text, style)),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_help(area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = CalculatorLayout::new(area);
        self.render_display(layout.display, buf);
        KeypadWidget::new(self.app.keypad()).render(layout.keypad, buf);
        Self::render_help(layout.help, buf);
    }
}
