//! Terminal event handling
//!
//! Calculator buttons are pressed with the mouse. The keyboard only quits.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::keypad::Keypad;

/// What a terminal event asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Press the keypad button at this index
    Press(usize),
    /// Mouse button released; drop the highlight
    Release,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps any terminal event, using `keypad_area` for mouse hit-testing
    #[must_use]
    pub fn handle_event(&self, event: &Event, keypad: &Keypad, keypad_area: Rect) -> InputAction {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse, keypad, keypad_area),
            _ => InputAction::None,
        }
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> InputAction {
        if event.kind == KeyEventKind::Release {
            return InputAction::None;
        }

        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c' | 'q') => InputAction::Quit,
                _ => InputAction::None,
            };
        }

        match event.code {
            KeyCode::Esc | KeyCode::Char('q') => InputAction::Quit,
            _ => InputAction::None,
        }
    }

    /// Maps a mouse event to an action
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent, keypad: &Keypad, keypad_area: Rect) -> InputAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => keypad
                .hit_test(keypad_area, event.column, event.row)
                .map_or(InputAction::None, InputAction::Press),
            MouseEventKind::Up(MouseButton::Left) => InputAction::Release,
            _ => InputAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 34,
        height: 12,
    };

    // ===== Keyboard =====

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Esc)), InputAction::Quit);
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('q'))), InputAction::Quit);
        assert_eq!(handler.handle_key(key_event_ctrl(KeyCode::Char('c'))), InputAction::Quit);
        assert_eq!(handler.handle_key(key_event_ctrl(KeyCode::Char('q'))), InputAction::Quit);
    }

    #[test]
    fn test_digit_keys_are_not_calculator_input() {
        let handler = InputHandler::new();
        for c in ['0', '7', '+', '=', '.'] {
            assert_eq!(handler.handle_key(key_event(KeyCode::Char(c))), InputAction::None);
        }
        assert_eq!(handler.handle_key(key_event(KeyCode::Enter)), InputAction::None);
    }

    #[test]
    fn test_other_ctrl_keys_ignored() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event_ctrl(KeyCode::Char('l'))), InputAction::None);
    }

    #[test]
    fn test_key_release_ignored() {
        let handler = InputHandler::new();
        let mut event = key_event(KeyCode::Esc);
        event.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_key(event), InputAction::None);
    }

    // ===== Mouse =====

    #[test]
    fn test_left_click_on_button() {
        let handler = InputHandler::new();
        let keypad = Keypad::new();
        let event = mouse_event(MouseEventKind::Down(MouseButton::Left), 2, 2);
        assert_eq!(handler.handle_mouse(event, &keypad, AREA), InputAction::Press(0));
    }

    #[test]
    fn test_left_click_outside_keypad() {
        let handler = InputHandler::new();
        let keypad = Keypad::new();
        let event = mouse_event(MouseEventKind::Down(MouseButton::Left), 50, 50);
        assert_eq!(handler.handle_mouse(event, &keypad, AREA), InputAction::None);
    }

    #[test]
    fn test_right_click_ignored() {
        let handler = InputHandler::new();
        let keypad = Keypad::new();
        let event = mouse_event(MouseEventKind::Down(MouseButton::Right), 2, 2);
        assert_eq!(handler.handle_mouse(event, &keypad, AREA), InputAction::None);
    }

    #[test]
    fn test_mouse_up_releases() {
        let handler = InputHandler::new();
        let keypad = Keypad::new();
        let event = mouse_event(MouseEventKind::Up(MouseButton::Left), 2, 2);
        assert_eq!(handler.handle_mouse(event, &keypad, AREA), InputAction::Release);
    }

    #[test]
    fn test_handle_event_dispatch() {
        let handler = InputHandler::new();
        let keypad = Keypad::new();
        let click = Event::Mouse(mouse_event(MouseEventKind::Down(MouseButton::Left), 2, 2));
        assert_eq!(handler.handle_event(&click, &keypad, AREA), InputAction::Press(0));
        let esc = Event::Key(key_event(KeyCode::Esc));
        assert_eq!(handler.handle_event(&esc, &keypad, AREA), InputAction::Quit);
        assert_eq!(
            handler.handle_event(&Event::Resize(80, 24), &keypad, AREA),
            InputAction::None
        );
    }
}
