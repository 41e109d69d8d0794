//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Start the refresh loops.
    StartRefresh,
    /// Send the input line to the command interpreter.
    Submit,
    Insert(char),
    Backspace,
    CursorLeft,
    CursorRight,
    /// Complete the verb being typed.
    Complete,
    HistoryPrev,
    HistoryNext,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into UI commands.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_control(key.code);
        }

        match key.code {
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Tab => KeyAction::Complete,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Left => KeyAction::CursorLeft,
            KeyCode::Right => KeyAction::CursorRight,
            KeyCode::Up => KeyAction::HistoryPrev,
            KeyCode::Down => KeyAction::HistoryNext,
            KeyCode::Char(ch) if !ch.is_control() => KeyAction::Insert(ch),
            _ => KeyAction::None,
        }
    }

    fn handle_control(&self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'c' | 'q' => KeyAction::Quit,
                'r' => KeyAction::StartRefresh,
                'e' => KeyAction::Submit,
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        key_with(code, KeyModifiers::empty())
    }

    fn ctrl(ch: char) -> KeyEvent {
        key_with(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_control_bindings() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(ctrl('q')), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl('c')), KeyAction::Quit);
        assert_eq!(handler.handle_key(ctrl('r')), KeyAction::StartRefresh);
        assert_eq!(handler.handle_key(ctrl('e')), KeyAction::Submit);
        assert_eq!(handler.handle_key(ctrl('x')), KeyAction::None);
    }

    #[test]
    fn maps_editing_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Enter)), KeyAction::Submit);
        assert_eq!(handler.handle_key(key(KeyCode::Tab)), KeyAction::Complete);
        assert_eq!(
            handler.handle_key(key(KeyCode::Backspace)),
            KeyAction::Backspace
        );
        assert_eq!(handler.handle_key(key(KeyCode::Up)), KeyAction::HistoryPrev);
        assert_eq!(
            handler.handle_key(key(KeyCode::Down)),
            KeyAction::HistoryNext
        );
    }

    #[test]
    fn plain_and_shifted_characters_are_typed() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q'))),
            KeyAction::Insert('q')
        );
        assert_eq!(
            handler.handle_key(key_with(KeyCode::Char('M'), KeyModifiers::SHIFT)),
            KeyAction::Insert('M')
        );
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::F(5))), KeyAction::None);
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), KeyAction::None);
    }
}
