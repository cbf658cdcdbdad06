//! Presentation adapter: display formatting, sizing, and the button grid

mod adapter;
mod format;
mod grid;

pub use adapter::PresentationAdapter;
pub use format::{format_display, format_number, DisplayScale, DisplayView, MAX_FRACTION_DIGITS};
pub use grid::{ButtonKind, GridButton, TokenGrid};
