#![forbid(unsafe_code)]

//! Text model for single-line inputs.
//!
//! # Role in lineedit
//! `lineedit-text` holds everything that decides *what the text is*: the
//! buffer and selection, the undo history, word/char navigation, the
//! leading-space sentinel convention, and composition of sequentially typed
//! characters into precomposed units (Hangul jamo into syllable blocks).
//!
//! [`LineEditor`] ties these together and is the only type most callers need.
//! All indices are char (Unicode scalar) indices and every index handed in is
//! clamped, never rejected.
//!
//! # Example
//! ```
//! use lineedit_text::LineEditor;
//!
//! let mut ed = LineEditor::new();
//! ed.insert_text("ㄱ");
//! ed.insert_text("ㅏ");
//! assert_eq!(ed.text(), "가");
//! assert_eq!(ed.cursor_index(), 1);
//! ```

pub mod buffer;
pub mod compose;
pub mod editor;
pub mod history;
pub mod navigation;
pub mod sentinel;

pub use buffer::TextState;
#[cfg(feature = "normalization")]
pub use compose::CombiningMarkComposer;
pub use compose::{GraphemeComposer, HangulComposer, NoComposition};
pub use editor::{AcceptTextChange, EditOutcome, LineEditor};
pub use history::{HistoryConfig, HistorySnapshot, HistoryStack};
pub use navigation::Direction;
pub use sentinel::{Normalized, SentinelSpace};
