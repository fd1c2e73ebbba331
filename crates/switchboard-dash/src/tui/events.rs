//! Key handling for the dashboard TUI.

use crossterm::event::KeyEvent;

/// Actions the dashboard understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application
    Quit,
    /// Move focus to the next filter dimension
    NextPanel,
    /// Move focus to the previous filter dimension
    PrevPanel,
    /// Move the cursor up within the focused list
    Up,
    /// Move the cursor down within the focused list
    Down,
    /// Toggle the option under the cursor
    Toggle,
    /// Select every option of the focused dimension
    SelectAll,
    /// Deselect every option of the focused dimension
    SelectNone,
    /// Reset all three dimensions to everything selected
    Reset,
    /// Toggle the help overlay
    Help,
    /// No action
    None,
}

impl KeyAction {
    /// Parse a key event into an action.
    pub fn from_key_event(key: &KeyEvent) -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        match (key.code, key.modifiers) {
            // Quit
            (KeyCode::Char('q'), KeyModifiers::NONE) => Self::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Self::Quit,
            (KeyCode::Esc, _) => Self::Quit,

            // Dimension navigation
            (KeyCode::Tab, KeyModifiers::NONE) => Self::NextPanel,
            (KeyCode::BackTab, _) => Self::PrevPanel,

            // Movement
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => Self::Up,
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => Self::Down,

            // Selection
            (KeyCode::Char(' '), _) | (KeyCode::Enter, _) => Self::Toggle,
            (KeyCode::Char('a'), KeyModifiers::NONE) => Self::SelectAll,
            (KeyCode::Char('n'), KeyModifiers::NONE) => Self::SelectNone,
            (KeyCode::Char('r'), KeyModifiers::NONE) => Self::Reset,

            // Help
            (KeyCode::Char('?'), _) => Self::Help,

            _ => Self::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(KeyAction::from_key_event(&key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(KeyAction::from_key_event(&key(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(
            KeyAction::from_key_event(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_selection_keys() {
        assert_eq!(KeyAction::from_key_event(&key(KeyCode::Char(' '))), KeyAction::Toggle);
        assert_eq!(KeyAction::from_key_event(&key(KeyCode::Char('a'))), KeyAction::SelectAll);
        assert_eq!(KeyAction::from_key_event(&key(KeyCode::Char('n'))), KeyAction::SelectNone);
        assert_eq!(KeyAction::from_key_event(&key(KeyCode::Char('r'))), KeyAction::Reset);
    }

    #[test]
    fn test_unmapped_key_is_none() {
        assert_eq!(KeyAction::from_key_event(&key(KeyCode::Char('z'))), KeyAction::None);
    }
}
