//! Clickable keypad for the TUI calculator
//!
//! Draws the [`TokenGrid`] inside a bordered block and maps mouse
//! coordinates back to buttons. Rendering and hit-testing share
//! [`Keypad::button_rect`], so a click always lands on the button drawn
//! under it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::presentation::{ButtonKind, GridButton, TokenGrid};

/// Keypad state: the grid plus which button is lit
#[derive(Debug, Clone, Default)]
pub struct Keypad {
    grid: TokenGrid,
    pressed: Option<usize>,
}

impl Keypad {
    /// Creates a keypad with the standard grid and nothing lit
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying grid
    #[must_use]
    pub fn grid(&self) -> &TokenGrid {
        &self.grid
    }

    /// Index of the highlighted button
    #[must_use]
    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    /// Highlights the button at `index`, releasing any other
    pub fn press_button(&mut self, index: usize) {
        if index < self.grid.button_count() {
            self.pressed = Some(index);
        }
    }

    /// Releases the highlighted button
    pub fn release_all(&mut self) {
        self.pressed = None;
    }

    /// Area inside the keypad border
    #[must_use]
    pub fn inner_area(area: Rect) -> Rect {
        Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        }
    }

    /// Screen rectangle of `button` within the keypad's `inner` area
    #[must_use]
    pub fn button_rect(&self, inner: Rect, button: &GridButton) -> Rect {
        let (rows, cols) = self.grid.dimensions();
        let cell_width = inner.width / cols as u16;
        let cell_height = inner.height / rows as u16;
        Rect {
            x: inner.x + button.col as u16 * cell_width,
            y: inner.y + button.row as u16 * cell_height,
            width: cell_width * button.span as u16,
            height: cell_height,
        }
    }

    /// True if every label can be drawn inside `inner`
    #[must_use]
    pub fn fits(&self, inner: Rect) -> bool {
        let (rows, cols) = self.grid.dimensions();
        inner.width >= cols as u16 * 3 && inner.height >= rows as u16
    }

    /// Converts a click position to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let inner = Self::inner_area(area);
        if !self.fits(inner) {
            return None;
        }

        self.grid.buttons().position(|button| {
            let rect = self.button_rect(inner, button);
            x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
        })
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    fn style_for(button: &GridButton, pressed: bool) -> Style {
        if pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match button.kind {
            ButtonKind::Function => Style::default().fg(Color::Gray),
            ButtonKind::Operator => Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
            ButtonKind::Digit => Style::default().fg(Color::White),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        let inner = Keypad::inner_area(area);
        if !self.keypad.fits(inner) {
            return; // Too small to render
        }

        for (index, button) in self.keypad.grid.buttons().enumerate() {
            let rect = self.keypad.button_rect(inner, button);
            let style = Self::style_for(button, self.keypad.pressed == Some(index));

            let label = format!("[{}]", button.label());
            let label_width = label.chars().count() as u16;
            let label_x = rect.x + rect.width.saturating_sub(label_width) / 2;
            let label_y = rect.y + rect.height / 2;

            if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(label_x, label_y, &Span::styled(label, style), rect.width);
            }
        }
    }
}
