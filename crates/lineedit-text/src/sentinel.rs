#![forbid(unsafe_code)]

//! Leading-space sentinel convention.
//!
//! Hosts that show a hint label over left-aligned inputs keep one leading
//! space in the buffer: `" "` reads as "visually empty" while `""` is truly
//! empty. When enabled, every stored value is normalized to start with a
//! space. When disabled, normalization is the identity.

/// Whether stored values carry a leading sentinel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SentinelSpace {
    enabled: bool,
}

/// Result of [`SentinelSpace::normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    /// A space was added in front of the input.
    pub prepended: bool,
}

impl SentinelSpace {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[must_use]
    pub const fn enabled() -> Self {
        Self::new(true)
    }

    #[must_use]
    pub const fn disabled() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Prefix a space unless `text` already starts with one.
    #[must_use]
    pub fn normalize(self, text: String) -> Normalized {
        if !self.enabled || text.starts_with(' ') {
            return Normalized {
                text,
                prepended: false,
            };
        }
        let mut out = String::with_capacity(text.len() + 1);
        out.push(' ');
        out.push_str(&text);
        Normalized {
            text: out,
            prepended: true,
        }
    }

    /// Content that shows no user text.
    #[must_use]
    pub fn is_visually_empty(self, content: &str) -> bool {
        content.is_empty() || (self.enabled && content == " ")
    }

    /// Whether the host should show its hint label.
    #[must_use]
    pub fn hint_visible(self, content: &str) -> bool {
        self.is_visually_empty(content)
    }
}
