#![forbid(unsafe_code)]

//! Canonical input events delivered by the host.
//!
//! The host translates its native key, text and pointer callbacks into
//! [`Event`] values. Pointer events arrive already resolved to a buffer
//! index: mapping screen coordinates to glyphs belongs to the renderer.

use bitflags::bitflags;

/// A single input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key pressed, repeated, or released.
    Key(KeyEvent),
    /// Text produced by the keyboard layout ("character typed").
    Typed(TypedEvent),
    /// Pointer activity over the text, resolved to a char index.
    Pointer(PointerEvent),
    /// Focus gained (`true`) or lost (`false`).
    Focus(bool),
}

/// Key identity, independent of modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// Press, auto-repeat, or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Repeat,
    Release,
}

bitflags! {
    /// Modifier keys held during an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const NONE = 0b0000;
        const SHIFT = 0b0001;
        const ALT = 0b0010;
        const CTRL = 0b0100;
        /// Command on Apple keyboards, the Windows/Meta key elsewhere.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A press of `code` with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    #[must_use]
    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    #[must_use]
    pub fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    #[must_use]
    pub fn super_key(&self) -> bool {
        self.modifiers.contains(Modifiers::SUPER)
    }

    /// Whether this transition should trigger an action.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }
}

/// Text typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypedEvent {
    pub text: String,
    pub modifiers: Modifiers,
}

impl TypedEvent {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            modifiers: Modifiers::NONE,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Pointer activity, with positions already mapped to char indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    /// Button pressed over the text.
    Down { index: usize },
    /// Pointer moved; `pressing` is true while a button is held.
    Moved { index: usize, pressing: bool },
    /// Button pressed anywhere outside the text.
    DownOutside,
    /// Button released anywhere outside the text.
    UpOutside,
    /// Double click over the text.
    DoubleClick { index: usize },
}

impl PointerEvent {
    /// The resolved index, for events that carry one.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Down { index } | Self::Moved { index, .. } | Self::DoubleClick { index } => {
                Some(*index)
            }
            Self::DownOutside | Self::UpOutside => None,
        }
    }
}

impl From<KeyEvent> for Event {
    fn from(key: KeyEvent) -> Self {
        Self::Key(key)
    }
}

impl From<TypedEvent> for Event {
    fn from(typed: TypedEvent) -> Self {
        Self::Typed(typed)
    }
}

impl From<PointerEvent> for Event {
    fn from(pointer: PointerEvent) -> Self {
        Self::Pointer(pointer)
    }
}
