#![forbid(unsafe_code)]

//! Core: input events, platform conventions, and command decoding.
//!
//! # Role in lineedit
//! `lineedit-core` is the input layer. It owns the normalized event types a
//! host delivers to a text input and the decoding step that turns those
//! events into [`EditCommand`](command::EditCommand) values, so the editing
//! engine never sees platform key codes.
//!
//! # Primary responsibilities
//! - **Event**: canonical input events (keys, typed text, pointer, focus).
//! - **Platform**: modifier conventions that differ between Apple and other
//!   desktops (word skip, line skip, command modifier).
//! - **EditCommand**: the tagged command set consumed by the controller.
//! - **Logging**: optional tracing re-exports and subscriber bootstrap.

pub mod command;
pub mod event;
pub mod logging;
pub mod platform;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};

pub use command::EditCommand;
pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, PointerEvent, TypedEvent};
pub use platform::Platform;
