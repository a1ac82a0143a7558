#![forbid(unsafe_code)]

//! Platform modifier-key conventions.

use std::fmt;

use crate::event::Modifiers;

/// Desktop family whose shortcut conventions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// macOS / iOS: Option skips words, Command+arrow jumps to line edges.
    Apple,
    /// Everything else: Ctrl skips words.
    Other,
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl Platform {
    /// Platform of the build target.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Self::Apple
        } else {
            Self::Other
        }
    }

    /// Parse a platform name (`apple`, `mac`, `macos`, `other`, ...).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "apple" | "mac" | "macos" | "ios" => Some(Self::Apple),
            "other" | "linux" | "windows" | "default" => Some(Self::Other),
            _ => None,
        }
    }

    /// Modifier combination that moves by words instead of chars.
    #[must_use]
    pub fn is_word_skip(self, modifiers: Modifiers) -> bool {
        match self {
            Self::Apple => modifiers.contains(Modifiers::ALT),
            Self::Other => modifiers.contains(Modifiers::CTRL),
        }
    }

    /// Modifier combination that jumps straight to the line start/end.
    #[must_use]
    pub fn is_line_skip(self, modifiers: Modifiers) -> bool {
        self == Self::Apple && modifiers.contains(Modifiers::SUPER)
    }

    /// Modifier used for clipboard, undo and select-all shortcuts.
    #[must_use]
    pub fn is_command(self, modifiers: Modifiers) -> bool {
        modifiers.intersects(Modifiers::CTRL | Modifiers::SUPER)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Apple => f.write_str("apple"),
            Self::Other => f.write_str("other"),
        }
    }
}
