//! The fixed button grid
//!
//! ```text
//! [ AC ] [+/-] [ % ] [ ÷ ]
//! [ 7  ] [ 8 ] [ 9 ] [ × ]
//! [ 4  ] [ 5 ] [ 6 ] [ - ]
//! [ 1  ] [ 2 ] [ 3 ] [ + ]
//! [    0     ] [ . ] [ = ]
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Operation, Token, UnaryOp};

/// Visual group a button belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonKind {
    /// AC, +/-, %
    Function,
    /// Binary operators and equals
    Operator,
    /// Digits and the decimal point
    Digit,
}

impl ButtonKind {
    fn of(token: Token) -> Self {
        match token {
            Token::Clear | Token::Unary(_) => Self::Function,
            Token::Binary(_) | Token::Equals => Self::Operator,
            Token::Digit(_) | Token::DecimalPoint => Self::Digit,
        }
    }
}

/// One button placed on the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridButton {
    /// Token forwarded when pressed
    pub token: Token,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Leftmost grid column (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
    /// Visual group
    pub kind: ButtonKind,
}

impl GridButton {
    fn new(token: Token, row: usize, col: usize) -> Self {
        Self::spanning(token, row, col, 1)
    }

    fn spanning(token: Token, row: usize, col: usize, span: usize) -> Self {
        Self {
            token,
            row,
            col,
            span,
            kind: ButtonKind::of(token),
        }
    }

    /// The label shown on the button, which is also what gets forwarded
    #[must_use]
    pub fn label(&self) -> String {
        self.token.label()
    }

    /// True if this button covers `(row, col)`
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }
}

/// The calculator's button layout, 5 rows by 4 columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGrid {
    buttons: Vec<GridButton>,
    rows: usize,
    cols: usize,
}

impl Default for TokenGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenGrid {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: AC +/- % ÷
            GridButton::new(Token::Clear, 0, 0),
            GridButton::new(Token::Unary(UnaryOp::Negate), 0, 1),
            GridButton::new(Token::Unary(UnaryOp::Percent), 0, 2),
            GridButton::new(Token::Binary(Operation::Divide), 0, 3),
            // Row 2: 7 8 9 ×
            GridButton::new(Token::Digit(7), 1, 0),
            GridButton::new(Token::Digit(8), 1, 1),
            GridButton::new(Token::Digit(9), 1, 2),
            GridButton::new(Token::Binary(Operation::Multiply), 1, 3),
            // Row 3: 4 5 6 -
            GridButton::new(Token::Digit(4), 2, 0),
            GridButton::new(Token::Digit(5), 2, 1),
            GridButton::new(Token::Digit(6), 2, 2),
            GridButton::new(Token::Binary(Operation::Subtract), 2, 3),
            // Row 4: 1 2 3 +
            GridButton::new(Token::Digit(1), 3, 0),
            GridButton::new(Token::Digit(2), 3, 1),
            GridButton::new(Token::Digit(3), 3, 2),
            GridButton::new(Token::Binary(Operation::Add), 3, 3),
            // Row 5: 0 (wide) . =
            GridButton::spanning(Token::Digit(0), 4, 0, 2),
            GridButton::new(Token::DecimalPoint, 4, 2),
            GridButton::new(Token::Equals, 4, 3),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GridButton> {
        self.buttons.get(index)
    }

    /// Index of the button covering `(row, col)`
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Gets the button covering `(row, col)`
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&GridButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Index of the button that sends `token`
    #[must_use]
    pub fn find(&self, token: Token) -> Option<usize> {
        self.buttons.iter().position(|b| b.token == token)
    }

    /// Returns an iterator over all buttons in row-major order
    pub fn buttons(&self) -> impl Iterator<Item = &GridButton> {
        self.buttons.iter()
    }

    /// Renders the grid as plain text, one line per row
    #[must_use]
    pub fn to_text(&self) -> Vec<String> {
        const CELL: usize = 5;
        (0..self.rows)
            .map(|row| {
                self.buttons
                    .iter()
                    .filter(|b| b.row == row)
                    .map(|b| {
                        let width = CELL * b.span + (b.span - 1) * 3;
                        format!("[{:^width$}]", b.label())
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}
