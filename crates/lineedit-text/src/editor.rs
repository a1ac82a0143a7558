#![forbid(unsafe_code)]

//! Composition-aware editing on top of [`TextState`] + [`HistoryStack`].
//!
//! [`LineEditor`] owns the buffer, its undo history, the sentinel-space mode,
//! an optional validation hook, and the [`GraphemeComposer`] consulted when
//! text is typed. It is the single mutator of its state.
//!
//! # Edit pipeline
//!
//! Every content-changing call builds a candidate string, normalizes it with
//! the [`SentinelSpace`] mode, and then commits it:
//!
//! 1. A candidate equal to the current content only moves the cursor
//!    ([`EditOutcome::Unchanged`], no history entry).
//! 2. The validation hook sees `(old, new)`; `false` leaves everything as is
//!    ([`EditOutcome::Rejected`]).
//! 3. Otherwise the pre-edit snapshot is pushed, the content replaced, and
//!    the cursor placed ([`EditOutcome::Applied`]).
//!
//! # Cursor placement
//!
//! With `i` the start of the selection when the edit began:
//!
//! | edit | cursor |
//! |---|---|
//! | plain insertion | `i + len(input)` |
//! | composition, sentinel already leading | `i + len(composed) - 1` |
//! | composition, otherwise | `i + len(composed)` |
//! | removal of `a..b` | `a`, plus 1 when a sentinel was prepended |
//!
//! Composition removes the char at `max(0, i - 1)` and inserts the composed
//! text at `i` of what remains. The cursor is clamped afterwards.
//!
//! # Example
//! ```
//! use lineedit_text::{EditOutcome, LineEditor};
//!
//! let mut ed = LineEditor::with_text("ab");
//! assert_eq!(ed.insert_text("c"), EditOutcome::Applied);
//! assert!(ed.undo());
//! assert_eq!(ed.text(), "ab");
//! assert!(ed.redo());
//! assert_eq!(ed.text(), "abc");
//! ```

use std::fmt;
use std::ops::Range;

use tracing::{debug, trace};

use crate::buffer::{TextState, insert_chars, next_boundary, previous_boundary, remove_chars};
use crate::compose::{GraphemeComposer, HangulComposer};
use crate::history::{HistoryConfig, HistorySnapshot, HistoryStack};
use crate::navigation::{self, Direction};
use crate::sentinel::{Normalized, SentinelSpace};

/// Validation hook: `(old, new) -> accept`.
pub type AcceptTextChange = Box<dyn Fn(&str, &str) -> bool>;

/// Result of a content-changing call.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOutcome {
    /// Content changed and a history entry was recorded.
    Applied,
    /// The validation hook refused the change.
    Rejected,
    /// The content would not change; at most the cursor moved.
    Unchanged,
}

impl EditOutcome {
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }

    #[must_use]
    pub const fn is_rejected(self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// Single-line editing engine.
pub struct LineEditor {
    state: TextState,
    history: HistoryStack,
    sentinel: SentinelSpace,
    composer: Box<dyn GraphemeComposer>,
    accept: Option<AcceptTextChange>,
    /// Bumped on every content change, including undo and redo.
    version: u64,
}

impl fmt::Debug for LineEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineEditor")
            .field("state", &self.state)
            .field("history", &self.history)
            .field("sentinel", &self.sentinel)
            .field("has_validator", &self.accept.is_some())
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl LineEditor {
    /// Empty editor with Hangul composition and no sentinel space.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: TextState::new(),
            history: HistoryStack::default(),
            sentinel: SentinelSpace::disabled(),
            composer: Box::new(HangulComposer),
            accept: None,
            version: 0,
        }
    }

    /// Editor holding `text` with the cursor at the end.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new().with_initial_text(text)
    }

    /// Replace the initial content without recording history.
    #[must_use]
    pub fn with_initial_text(mut self, text: impl Into<String>) -> Self {
        self.reset_content(text.into());
        self
    }

    /// Set the sentinel mode, normalizing the current content.
    #[must_use]
    pub fn with_sentinel(mut self, sentinel: SentinelSpace) -> Self {
        self.sentinel = sentinel;
        let content = self.state.text().to_owned();
        self.reset_content(content);
        self
    }

    #[must_use]
    pub fn with_composer(mut self, composer: impl GraphemeComposer + 'static) -> Self {
        self.composer = Box::new(composer);
        self
    }

    /// Replace the history with an empty one using `config`.
    #[must_use]
    pub fn with_history_config(mut self, config: HistoryConfig) -> Self {
        self.history = HistoryStack::new(config);
        self
    }

    #[must_use]
    pub fn with_accept_text_change(
        mut self,
        accept: impl Fn(&str, &str) -> bool + 'static,
    ) -> Self {
        self.set_accept_text_change(accept);
        self
    }

    pub fn set_accept_text_change(&mut self, accept: impl Fn(&str, &str) -> bool + 'static) {
        self.accept = Some(Box::new(accept));
    }

    /// Back to accepting every change.
    pub fn clear_accept_text_change(&mut self) {
        self.accept = None;
    }

    fn reset_content(&mut self, text: String) {
        let Normalized { text, .. } = self.sentinel.normalize(text);
        self.state = TextState::with_text(text);
    }

    // -- Accessors ---------------------------------------------------------

    #[must_use]
    pub fn text(&self) -> &str {
        self.state.text()
    }

    /// Length in chars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> &TextState {
        &self.state
    }

    #[must_use]
    pub fn cursor_index(&self) -> usize {
        self.state.cursor_index()
    }

    #[must_use]
    pub fn selection_start(&self) -> usize {
        self.state.selection_start()
    }

    #[must_use]
    pub fn selection_end(&self) -> usize {
        self.state.selection_end()
    }

    #[must_use]
    pub fn selection_range(&self) -> Range<usize> {
        self.state.selection_range()
    }

    #[must_use]
    pub fn selection_len(&self) -> usize {
        self.state.selection_len()
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.state.has_selection()
    }

    #[must_use]
    pub fn selection_text(&self) -> &str {
        self.state.selection_text()
    }

    #[must_use]
    pub fn sentinel(&self) -> SentinelSpace {
        self.sentinel
    }

    #[must_use]
    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Content change counter.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The content shows no user text.
    #[must_use]
    pub fn is_visually_empty(&self) -> bool {
        self.sentinel.is_visually_empty(self.state.text())
    }

    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.sentinel.hint_visible(self.state.text())
    }

    // -- Selection ---------------------------------------------------------

    pub fn select(&mut self, start: usize, end: usize) {
        self.state.select(start, end);
    }

    pub fn select_all(&mut self) {
        self.state.select_all();
    }

    pub fn set_cursor_index(&mut self, index: usize) {
        self.state.set_cursor_index(index);
    }

    pub fn set_selection_start(&mut self, index: usize) {
        self.state.set_selection_start(index);
    }

    pub fn set_selection_end(&mut self, index: usize) {
        self.state.set_selection_end(index);
    }

    /// Move to `index`: extending moves only the selection start, otherwise
    /// the selection collapses onto `index`.
    pub fn move_to(&mut self, index: usize, extend: bool) {
        if extend {
            self.state.set_selection_start(index);
        } else {
            self.state.set_cursor_index(index);
        }
    }

    /// Select the word run around `index`.
    pub fn select_word_at(&mut self, index: usize) {
        let start = self.left_index(index, true);
        let end = self.right_index(index, true);
        self.state.select(start, end);
    }

    // -- Navigation --------------------------------------------------------

    /// Unclamped; see [`navigation::next_index`].
    #[must_use]
    pub fn next_index(&self, index: usize, direction: Direction, word: bool) -> usize {
        navigation::next_index(self.state.text(), index, direction, word)
    }

    #[must_use]
    pub fn left_index(&self, index: usize, word: bool) -> usize {
        self.next_index(index, Direction::Left, word)
    }

    #[must_use]
    pub fn right_index(&self, index: usize, word: bool) -> usize {
        self.next_index(index, Direction::Right, word)
    }

    #[must_use]
    pub fn line_edge(&self, direction: Direction) -> usize {
        navigation::line_edge(self.state.text(), direction)
    }

    // -- Editing -----------------------------------------------------------

    /// Replace the content with `value` as is (no sentinel normalization).
    ///
    /// Selection endpoints are reclamped, not reset.
    pub fn set_text(&mut self, value: impl Into<String>) -> EditOutcome {
        let value = value.into();
        if value == self.state.text() {
            return EditOutcome::Unchanged;
        }
        self.apply(value)
    }

    fn apply(&mut self, value: String) -> EditOutcome {
        let accepted = self
            .accept
            .as_ref()
            .is_none_or(|accept| accept(self.state.text(), &value));
        if !accepted {
            debug!(
                old_len = self.state.len(),
                new_len = value.chars().count(),
                "text change rejected"
            );
            return EditOutcome::Rejected;
        }
        self.history.push(self.state.snapshot());
        self.state.replace_content(value);
        self.version += 1;
        EditOutcome::Applied
    }

    /// Apply the normalized `text`, then place the cursor at `cursor`.
    fn commit(&mut self, text: String, cursor: usize) -> EditOutcome {
        let outcome = if text == self.state.text() {
            EditOutcome::Unchanged
        } else {
            self.apply(text)
        };
        if !outcome.is_rejected() {
            self.state.set_cursor_index(cursor);
        }
        outcome
    }

    /// Type `input` at the selection, composing with the preceding char when
    /// the composer allows it.
    ///
    /// Control characters are dropped first.
    pub fn insert_text(&mut self, input: &str) -> EditOutcome {
        let input: String = input.chars().filter(|c| !c.is_control()).collect();
        if input.is_empty() {
            return EditOutcome::Unchanged;
        }

        let range = self.state.selection_range();
        let index = range.start;
        let without = remove_chars(self.state.text(), range);

        if let Some(composed) = self.try_compose(index, &input) {
            let slot = index.saturating_sub(1);
            let candidate = insert_chars(&remove_chars(&without, slot..slot + 1), index, &composed);
            let Normalized { text, prepended } = self.sentinel.normalize(candidate);
            let netted = usize::from(self.sentinel.is_enabled() && !prepended);
            let cursor = index + composed.chars().count() - netted;
            return self.commit(text, cursor);
        }

        let candidate = insert_chars(&without, index, &input);
        let Normalized { text, .. } = self.sentinel.normalize(candidate);
        self.commit(text, index + input.chars().count())
    }

    /// Composition of the char at `max(0, index - 1)` with `input`.
    fn try_compose(&self, index: usize, input: &str) -> Option<String> {
        let last = self.state.char_at(index.saturating_sub(1))?;
        let mut pair = String::with_capacity(last.len_utf8() + input.len());
        pair.push(last);
        pair.push_str(input);
        let composed = self.composer.compose(&pair)?;
        if composed.is_empty() {
            return None;
        }
        trace!(pair = %pair, composed = %composed, "composed graphemes");
        Some(composed)
    }

    /// Remove the selection, or the grapheme cluster before the cursor.
    pub fn delete_backward(&mut self) -> EditOutcome {
        if self.state.has_selection() {
            return self.delete_selection();
        }
        let index = self.state.cursor_index();
        let Some(start) = previous_boundary(self.state.text(), index) else {
            return EditOutcome::Unchanged;
        };
        self.remove(start..index)
    }

    /// Remove the selection, or the grapheme cluster after the cursor.
    pub fn delete_forward(&mut self) -> EditOutcome {
        if self.state.has_selection() {
            return self.delete_selection();
        }
        let index = self.state.cursor_index();
        let Some(end) = next_boundary(self.state.text(), index) else {
            return EditOutcome::Unchanged;
        };
        self.remove(index..end)
    }

    pub fn delete_selection(&mut self) -> EditOutcome {
        if !self.state.has_selection() {
            return EditOutcome::Unchanged;
        }
        self.remove(self.state.selection_range())
    }

    fn remove(&mut self, range: Range<usize>) -> EditOutcome {
        let start = range.start;
        let Normalized { text, prepended } =
            self.sentinel.normalize(remove_chars(self.state.text(), range));
        self.commit(text, start + usize::from(prepended))
    }

    // -- History -----------------------------------------------------------

    /// Restore the state before the last accepted edit. `false` at the
    /// oldest entry.
    pub fn undo(&mut self) -> bool {
        let current = self.state.snapshot();
        let Some(snapshot) = self.history.undo(current).cloned() else {
            return false;
        };
        self.restore(snapshot);
        true
    }

    /// Reapply the edit undone last. `false` at the newest entry.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo().cloned() else {
            return false;
        };
        self.restore(snapshot);
        true
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Undo and redo bypass the validation hook and never record history.
    fn restore(&mut self, snapshot: HistorySnapshot) {
        let HistorySnapshot { text, selection } = snapshot;
        if text != self.state.text() {
            self.version += 1;
        }
        self.state.replace_content(text);
        self.state.select_range(selection);
    }
}
