#![forbid(unsafe_code)]

//! Edit commands decoded from raw input events.
//!
//! [`EditCommand`] is the only vocabulary the controller understands. Key
//! codes, modifier conventions and control characters are resolved here, once,
//! at the event boundary.
//!
//! # Example
//! ```
//! use lineedit_core::{EditCommand, KeyCode, KeyEvent, Modifiers, Platform};
//!
//! let key = KeyEvent::new(KeyCode::Left).with_modifiers(Modifiers::CTRL | Modifiers::SHIFT);
//! assert_eq!(
//!     EditCommand::from_key(&key, Platform::Other),
//!     Some(EditCommand::MoveLeft { word: true, extend: true })
//! );
//! ```

use crate::event::{KeyCode, KeyEvent, Modifiers, TypedEvent};
use crate::platform::Platform;

/// A single editing intention.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditCommand {
    /// Insert text at the cursor, replacing the selection.
    InsertText(String),
    Backspace,
    Delete,
    MoveLeft { word: bool, extend: bool },
    MoveRight { word: bool, extend: bool },
    MoveHome { extend: bool },
    MoveEnd { extend: bool },
    SelectAll,
    Copy,
    Cut,
    Paste,
    Undo,
    Redo,
    /// Return pressed.
    Submit,
    /// Escape pressed.
    Cancel,
}

impl EditCommand {
    /// Decode a key transition.
    ///
    /// Returns `None` for releases and keys a single-line input ignores.
    /// Return and Escape arrive as typed text (see [`Self::from_typed`]).
    #[must_use]
    pub fn from_key(key: &KeyEvent, platform: Platform) -> Option<Self> {
        if !key.is_actionable() {
            return None;
        }
        let extend = key.shift();
        let word = platform.is_word_skip(key.modifiers);
        let line = platform.is_line_skip(key.modifiers);

        match key.code {
            KeyCode::Char(c) if platform.is_command(key.modifiers) => {
                match c.to_ascii_lowercase() {
                    'z' if extend => Some(Self::Redo),
                    'z' => Some(Self::Undo),
                    'c' => Some(Self::Copy),
                    'x' => Some(Self::Cut),
                    'v' => Some(Self::Paste),
                    'a' => Some(Self::SelectAll),
                    _ => None,
                }
            }
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Delete => Some(Self::Delete),
            KeyCode::Left if line => Some(Self::MoveHome { extend }),
            KeyCode::Left => Some(Self::MoveLeft { word, extend }),
            KeyCode::Right if line => Some(Self::MoveEnd { extend }),
            KeyCode::Right => Some(Self::MoveRight { word, extend }),
            KeyCode::Home => Some(Self::MoveHome { extend }),
            KeyCode::End => Some(Self::MoveEnd { extend }),
            _ => None,
        }
    }

    /// Decode typed text.
    ///
    /// Text typed with Super held is a shortcut, not input. Backspace,
    /// delete and tab codes are handled by key events or ignored.
    #[must_use]
    pub fn from_typed(typed: &TypedEvent) -> Option<Self> {
        if typed.modifiers.contains(Modifiers::SUPER) {
            return None;
        }
        match typed.text.chars().next()? {
            '\u{8}' | '\u{7f}' | '\t' => None,
            '\n' | '\r' => Some(Self::Submit),
            '\u{1b}' => Some(Self::Cancel),
            _ => Some(Self::InsertText(typed.text.clone())),
        }
    }

    /// Whether the command can change buffer content.
    #[must_use]
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::InsertText(_)
                | Self::Backspace
                | Self::Delete
                | Self::Cut
                | Self::Paste
                | Self::Undo
                | Self::Redo
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyEventKind;

    fn key(code: KeyCode, modifiers: Modifiers) -> KeyEvent {
        KeyEvent::new(code).with_modifiers(modifiers)
    }

    #[test]
    fn undo_and_redo() {
        let undo = key(KeyCode::Char('z'), Modifiers::CTRL);
        assert_eq!(
            EditCommand::from_key(&undo, Platform::Other),
            Some(EditCommand::Undo)
        );
        let redo = key(KeyCode::Char('Z'), Modifiers::SUPER | Modifiers::SHIFT);
        assert_eq!(
            EditCommand::from_key(&redo, Platform::Apple),
            Some(EditCommand::Redo)
        );
    }

    #[test]
    fn clipboard_shortcuts() {
        let cases = [
            ('c', EditCommand::Copy),
            ('x', EditCommand::Cut),
            ('v', EditCommand::Paste),
            ('a', EditCommand::SelectAll),
        ];
        for (c, expected) in cases {
            let k = key(KeyCode::Char(c), Modifiers::CTRL);
            assert_eq!(EditCommand::from_key(&k, Platform::Other), Some(expected));
        }
    }

    #[test]
    fn plain_char_key_is_not_a_command() {
        let k = key(KeyCode::Char('c'), Modifiers::NONE);
        assert_eq!(EditCommand::from_key(&k, Platform::Other), None);
        let k = key(KeyCode::Char('q'), Modifiers::CTRL);
        assert_eq!(EditCommand::from_key(&k, Platform::Other), None);
    }

    #[test]
    fn arrows_respect_platform_word_skip() {
        let alt_left = key(KeyCode::Left, Modifiers::ALT);
        assert_eq!(
            EditCommand::from_key(&alt_left, Platform::Apple),
            Some(EditCommand::MoveLeft {
                word: true,
                extend: false
            })
        );
        assert_eq!(
            EditCommand::from_key(&alt_left, Platform::Other),
            Some(EditCommand::MoveLeft {
                word: false,
                extend: false
            })
        );
    }

    #[test]
    fn super_arrow_jumps_on_apple() {
        let k = key(KeyCode::Right, Modifiers::SUPER | Modifiers::SHIFT);
        assert_eq!(
            EditCommand::from_key(&k, Platform::Apple),
            Some(EditCommand::MoveEnd { extend: true })
        );
        let k = key(KeyCode::Left, Modifiers::SUPER);
        assert_eq!(
            EditCommand::from_key(&k, Platform::Apple),
            Some(EditCommand::MoveHome { extend: false })
        );
    }

    #[test]
    fn home_end_and_deletion() {
        let k = key(KeyCode::Home, Modifiers::SHIFT);
        assert_eq!(
            EditCommand::from_key(&k, Platform::Other),
            Some(EditCommand::MoveHome { extend: true })
        );
        let k = key(KeyCode::End, Modifiers::NONE);
        assert_eq!(
            EditCommand::from_key(&k, Platform::Other),
            Some(EditCommand::MoveEnd { extend: false })
        );
        let k = key(KeyCode::Backspace, Modifiers::NONE);
        assert_eq!(
            EditCommand::from_key(&k, Platform::Other),
            Some(EditCommand::Backspace)
        );
        let k = key(KeyCode::Delete, Modifiers::NONE);
        assert_eq!(
            EditCommand::from_key(&k, Platform::Other),
            Some(EditCommand::Delete)
        );
    }

    #[test]
    fn release_is_ignored() {
        let k = key(KeyCode::Backspace, Modifiers::NONE).with_kind(KeyEventKind::Release);
        assert_eq!(EditCommand::from_key(&k, Platform::Other), None);
    }

    #[test]
    fn enter_key_is_left_to_typed_text() {
        let k = key(KeyCode::Enter, Modifiers::NONE);
        assert_eq!(EditCommand::from_key(&k, Platform::Other), None);
    }

    #[test]
    fn typed_control_codes() {
        assert_eq!(
            EditCommand::from_typed(&TypedEvent::new("\r")),
            Some(EditCommand::Submit)
        );
        assert_eq!(
            EditCommand::from_typed(&TypedEvent::new("\n")),
            Some(EditCommand::Submit)
        );
        assert_eq!(
            EditCommand::from_typed(&TypedEvent::new("\u{1b}")),
            Some(EditCommand::Cancel)
        );
        assert_eq!(EditCommand::from_typed(&TypedEvent::new("\u{8}")), None);
        assert_eq!(EditCommand::from_typed(&TypedEvent::new("\u{7f}")), None);
        assert_eq!(EditCommand::from_typed(&TypedEvent::new("\t")), None);
        assert_eq!(EditCommand::from_typed(&TypedEvent::new("")), None);
    }

    #[test]
    fn typed_text_inserts() {
        assert_eq!(
            EditCommand::from_typed(&TypedEvent::new("ㅏ")),
            Some(EditCommand::InsertText("ㅏ".to_string()))
        );
    }

    #[test]
    fn typed_with_super_is_ignored() {
        let typed = TypedEvent::new("c").with_modifiers(Modifiers::SUPER);
        assert_eq!(EditCommand::from_typed(&typed), None);
    }

    #[test]
    fn edit_classification() {
        assert!(EditCommand::Backspace.is_edit());
        assert!(EditCommand::Paste.is_edit());
        assert!(!EditCommand::Copy.is_edit());
        assert!(
            !EditCommand::MoveLeft {
                word: false,
                extend: false
            }
            .is_edit()
        );
    }
}
