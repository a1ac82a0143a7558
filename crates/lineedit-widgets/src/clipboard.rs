#![forbid(unsafe_code)]

//! Clipboard collaborator.
//!
//! The controller only reads on paste and writes on copy/cut. A read that
//! yields nothing and a failed write are both no-ops for the text; the
//! controller logs them and moves on.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Why a clipboard write failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard is reachable from this host.
    Unavailable,
    /// The host refused the write.
    Rejected(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => f.write_str("clipboard unavailable"),
            Self::Rejected(reason) => write!(f, "clipboard write rejected: {reason}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Host clipboard access.
pub trait Clipboard {
    /// Current clipboard text, if any.
    fn read(&mut self) -> Option<String>;

    /// Replace the clipboard text.
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Process-local clipboard. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(text.into()))),
        }
    }

    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn read(&mut self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        *self.slot.borrow_mut() = Some(text.to_owned());
        Ok(())
    }
}

/// Clipboard for hosts without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn read(&mut self) -> Option<String> {
        None
    }

    fn write(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}
