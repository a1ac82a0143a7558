#![forbid(unsafe_code)]

//! Single-line text input controller.
//!
//! [`TextInput`] turns host events into [`EditCommand`]s, runs them against a
//! [`LineEditor`], and reports what changed through payload-free [`Signal`]s.
//! Listeners re-read state through the getters.
//!
//! # Event rules
//!
//! - Key and typed events are ignored while unfocused.
//! - Pointer down places the cursor and focuses; a drag with the button held
//!   moves the selection end; a double click selects the word under the
//!   pointer.
//! - Pressing outside blurs. Releasing outside blurs too, unless the press
//!   started a drag.
//!
//! # Failure Modes
//!
//! - **Re-entrant listener**: listeners run while the controller is mutably
//!   borrowed. A listener that reaches back into the same `TextInput` through
//!   a `RefCell` panics on the borrow.
//!
//! # Example
//! ```
//! use lineedit_core::{Event, TypedEvent};
//! use lineedit_widgets::TextInput;
//!
//! let mut input = TextInput::new();
//! input.focus();
//! input.handle_event(&Event::Typed(TypedEvent::new("ㄱ")));
//! input.handle_event(&Event::Typed(TypedEvent::new("ㅏ")));
//! assert_eq!(input.text(), "가");
//! ```

use std::time::Instant;

use lineedit_core::{EditCommand, Event, PointerEvent, Platform};
use lineedit_text::{EditOutcome, GraphemeComposer, LineEditor, SentinelSpace};
use tracing::{debug, trace, warn};

use crate::caret::Caret;
use crate::clipboard::{Clipboard, MemoryClipboard};
use crate::config::TextInputConfig;
use crate::signal::Signal;

/// What listeners can observe, compared before and after each change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ViewState {
    version: u64,
    selection: (usize, usize),
    caret_visible: bool,
    focused: bool,
}

/// Controller for one single-line text field.
pub struct TextInput {
    editor: LineEditor,
    clipboard: Box<dyn Clipboard>,
    platform: Platform,
    focused: bool,
    /// A drag happened since the last press.
    dragging: bool,
    caret: Caret,
    on_text_updated: Signal,
    on_focused: Signal,
    on_focus_lost: Signal,
    on_return_pressed: Signal,
    on_esc_pressed: Signal,
    on_redraw: Signal,
}

impl std::fmt::Debug for TextInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextInput")
            .field("editor", &self.editor)
            .field("platform", &self.platform)
            .field("focused", &self.focused)
            .field("caret", &self.caret)
            .finish_non_exhaustive()
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TextInput {
    fn drop(&mut self) {
        for signal in [
            &self.on_text_updated,
            &self.on_focused,
            &self.on_focus_lost,
            &self.on_return_pressed,
            &self.on_esc_pressed,
            &self.on_redraw,
        ] {
            signal.clear();
        }
        debug!("text input disposed");
    }
}

impl TextInput {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TextInputConfig::default())
    }

    #[must_use]
    pub fn with_config(config: TextInputConfig) -> Self {
        let editor = LineEditor::new()
            .with_sentinel(SentinelSpace::new(config.sentinel_space))
            .with_history_config(config.history);
        Self {
            editor,
            clipboard: Box::new(MemoryClipboard::new()),
            platform: config.platform,
            focused: false,
            dragging: false,
            caret: Caret::new(config.caret_blink),
            on_text_updated: Signal::new(),
            on_focused: Signal::new(),
            on_focus_lost: Signal::new(),
            on_return_pressed: Signal::new(),
            on_esc_pressed: Signal::new(),
            on_redraw: Signal::new(),
        }
    }

    /// Initial content, not undoable.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.editor = std::mem::take(&mut self.editor).with_initial_text(text);
        self
    }

    #[must_use]
    pub fn with_composer(mut self, composer: impl GraphemeComposer + 'static) -> Self {
        self.editor = std::mem::take(&mut self.editor).with_composer(composer);
        self
    }

    #[must_use]
    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    #[must_use]
    pub fn with_accept_text_change(
        mut self,
        accept: impl Fn(&str, &str) -> bool + 'static,
    ) -> Self {
        self.editor.set_accept_text_change(accept);
        self
    }

    pub fn set_accept_text_change(&mut self, accept: impl Fn(&str, &str) -> bool + 'static) {
        self.editor.set_accept_text_change(accept);
    }

    // --- Signals ---

    /// Content changed (edit, undo, redo, or [`Self::set_text`]).
    #[must_use]
    pub fn on_text_updated(&self) -> &Signal {
        &self.on_text_updated
    }

    #[must_use]
    pub fn on_focused(&self) -> &Signal {
        &self.on_focused
    }

    #[must_use]
    pub fn on_focus_lost(&self) -> &Signal {
        &self.on_focus_lost
    }

    #[must_use]
    pub fn on_return_pressed(&self) -> &Signal {
        &self.on_return_pressed
    }

    #[must_use]
    pub fn on_esc_pressed(&self) -> &Signal {
        &self.on_esc_pressed
    }

    /// Text, selection, focus or caret visibility changed.
    #[must_use]
    pub fn on_redraw(&self) -> &Signal {
        &self.on_redraw
    }

    // --- State ---

    #[must_use]
    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.editor.text()
    }

    #[must_use]
    pub fn cursor_index(&self) -> usize {
        self.editor.cursor_index()
    }

    #[must_use]
    pub fn selection_start(&self) -> usize {
        self.editor.selection_start()
    }

    #[must_use]
    pub fn selection_end(&self) -> usize {
        self.editor.selection_end()
    }

    #[must_use]
    pub fn selection_text(&self) -> &str {
        self.editor.selection_text()
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn caret_visible(&self) -> bool {
        self.caret.is_visible()
    }

    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.editor.hint_visible()
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    // --- Host operations ---

    /// Replace the content from the host side. Undoable and validated.
    pub fn set_text(&mut self, value: impl Into<String>) -> EditOutcome {
        let value = value.into();
        self.tracked(|input| input.editor.set_text(value))
    }

    pub fn select(&mut self, start: usize, end: usize) {
        self.tracked(|input| input.editor.select(start, end));
    }

    pub fn select_all(&mut self) {
        self.tracked(|input| input.editor.select_all());
    }

    pub fn focus(&mut self) {
        self.tracked(|input| input.set_focused(true));
    }

    pub fn blur(&mut self) {
        self.tracked(|input| input.set_focused(false));
    }

    /// Run `command` regardless of focus.
    pub fn execute(&mut self, command: EditCommand) {
        self.tracked(|input| input.apply(command));
    }

    /// One caret blink step. Returns whether visibility changed.
    pub fn blink(&mut self) -> bool {
        let blinking = self.caret_blinks();
        let changed = self.caret.step(self.focused, blinking);
        if changed {
            self.on_redraw.emit();
        }
        changed
    }

    /// Drive blinking from a host clock. Returns whether visibility changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let blinking = self.caret_blinks();
        let changed = self.caret.tick(now, self.focused, blinking);
        if changed {
            self.on_redraw.emit();
        }
        changed
    }

    fn caret_blinks(&self) -> bool {
        !self.editor.has_selection() && self.editor.sentinel().is_enabled()
    }

    // --- Events ---

    /// Handle a host event. Returns whether it was consumed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Focus(focused) => {
                let focused = *focused;
                self.tracked(|input| input.set_focused(focused));
                true
            }
            Event::Pointer(pointer) => self.handle_pointer(*pointer),
            _ if !self.focused => false,
            Event::Key(key) => match EditCommand::from_key(key, self.platform) {
                Some(command) => {
                    self.execute(command);
                    true
                }
                None => false,
            },
            Event::Typed(typed) => match EditCommand::from_typed(typed) {
                Some(command) => {
                    self.execute(command);
                    true
                }
                None => false,
            },
        }
    }

    fn handle_pointer(&mut self, pointer: PointerEvent) -> bool {
        match pointer {
            PointerEvent::Down { index } => {
                self.dragging = false;
                self.tracked(|input| {
                    input.editor.set_cursor_index(index);
                    input.set_focused(true);
                });
                true
            }
            PointerEvent::Moved { index, pressing } => {
                if !(self.focused && pressing) {
                    return false;
                }
                self.dragging = true;
                self.tracked(|input| input.editor.set_selection_end(index));
                true
            }
            PointerEvent::DownOutside => {
                self.dragging = false;
                if !self.focused {
                    return false;
                }
                self.blur();
                true
            }
            PointerEvent::UpOutside => {
                let dragged = std::mem::take(&mut self.dragging);
                if dragged || !self.focused {
                    return false;
                }
                self.blur();
                true
            }
            PointerEvent::DoubleClick { index } => {
                self.tracked(|input| input.editor.select_word_at(index));
                true
            }
        }
    }

    // --- Internals ---

    fn view_state(&self) -> ViewState {
        ViewState {
            version: self.editor.version(),
            selection: (self.editor.selection_start(), self.editor.selection_end()),
            caret_visible: self.caret.is_visible(),
            focused: self.focused,
        }
    }

    /// Run `f`, then emit the notifications its changes call for.
    fn tracked<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let before = self.view_state();
        let out = f(self);
        let after = self.view_state();

        if after.version != before.version {
            self.on_text_updated.emit();
        }
        if after.version != before.version || after.selection != before.selection {
            self.caret.reset(self.focused);
        }
        if self.view_state() != before {
            self.on_redraw.emit();
        }
        out
    }

    fn set_focused(&mut self, focused: bool) {
        if self.focused == focused {
            return;
        }
        self.focused = focused;
        self.caret.reset(focused);
        debug!(focused, "text input focus changed");
        if focused {
            self.on_focused.emit();
        } else {
            self.on_focus_lost.emit();
        }
    }

    fn apply(&mut self, command: EditCommand) {
        trace!(?command, "text input command");
        match command {
            EditCommand::InsertText(text) => {
                let _ = self.editor.insert_text(&text);
            }
            EditCommand::Backspace => {
                let _ = self.editor.delete_backward();
            }
            EditCommand::Delete => {
                let _ = self.editor.delete_forward();
            }
            EditCommand::MoveLeft { word, extend } => {
                let index = self.editor.left_index(self.editor.selection_start(), word);
                self.editor.move_to(index, extend);
            }
            EditCommand::MoveRight { word, extend } => {
                let index = self.editor.right_index(self.editor.selection_start(), word);
                self.editor.move_to(index, extend);
            }
            EditCommand::MoveHome { extend } => self.editor.move_to(0, extend),
            EditCommand::MoveEnd { extend } => self.editor.move_to(self.editor.len(), extend),
            EditCommand::SelectAll => self.editor.select_all(),
            EditCommand::Copy => {
                self.copy_selection();
            }
            EditCommand::Cut => {
                if self.copy_selection() {
                    let _ = self.editor.delete_selection();
                }
            }
            EditCommand::Paste => match self.clipboard.read() {
                Some(text) => {
                    let _ = self.editor.insert_text(&text);
                }
                None => debug!("clipboard empty, nothing to paste"),
            },
            EditCommand::Undo => {
                self.editor.undo();
            }
            EditCommand::Redo => {
                self.editor.redo();
            }
            EditCommand::Submit => self.on_return_pressed.emit(),
            EditCommand::Cancel => self.on_esc_pressed.emit(),
        }
    }

    /// Write a non-empty selection to the clipboard. Returns whether it was
    /// written.
    fn copy_selection(&mut self) -> bool {
        if !self.editor.has_selection() {
            return false;
        }
        match self.clipboard.write(self.editor.selection_text()) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "clipboard write failed");
                false
            }
        }
    }
}
