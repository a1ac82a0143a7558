#![forbid(unsafe_code)]

//! Text input controller built on `lineedit-text`.
//!
//! # Role in lineedit
//! `lineedit-widgets` is the host-facing layer: [`TextInput`] consumes
//! `lineedit-core` events, drives a [`LineEditor`](lineedit_text::LineEditor),
//! talks to a [`Clipboard`], blinks a [`Caret`], and notifies listeners
//! through [`Signal`]s. Rendering and coordinate-to-index mapping stay with
//! the host.

pub mod caret;
pub mod clipboard;
pub mod config;
pub mod input;
pub mod signal;

pub use caret::Caret;
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, NoClipboard};
pub use config::{ConfigError, TextInputConfig, TextInputConfigParse};
pub use input::TextInput;
pub use signal::{Signal, Subscription};
