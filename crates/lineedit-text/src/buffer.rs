#![forbid(unsafe_code)]

//! Text content plus a two-endpoint selection.
//!
//! [`TextState`] stores the string and the two selection endpoints. The
//! endpoints are independent: `selection_start` may be greater than
//! `selection_end`, which lets shift-extension keep its direction. Range math
//! always normalizes to `min..max`.
//!
//! # Invariants
//!
//! 1. `selection_start <= len()` and `selection_end <= len()` after every call.
//! 2. `len()` is the char count of `text()`.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::history::HistorySnapshot;

/// Buffer content and selection endpoints, in char indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextState {
    content: String,
    /// Cached char count of `content`.
    len: usize,
    selection_start: usize,
    selection_end: usize,
}

impl TextState {
    /// Empty buffer with the cursor at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `text` with the cursor at the end.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let content = text.into();
        let len = content.chars().count();
        Self {
            content,
            len,
            selection_start: len,
            selection_end: len,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.content
    }

    /// Length in chars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clamp `index` into `0..=len()`.
    #[must_use]
    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.len)
    }

    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.content.chars().nth(index)
    }

    #[must_use]
    pub fn selection_start(&self) -> usize {
        self.selection_start
    }

    #[must_use]
    pub fn selection_end(&self) -> usize {
        self.selection_end
    }

    pub fn set_selection_start(&mut self, index: usize) {
        self.selection_start = self.clamp(index);
    }

    pub fn set_selection_end(&mut self, index: usize) {
        self.selection_end = self.clamp(index);
    }

    /// The cursor is the selection start.
    #[must_use]
    pub fn cursor_index(&self) -> usize {
        self.selection_start
    }

    /// Collapse the selection onto `index` (clamped).
    pub fn set_cursor_index(&mut self, index: usize) {
        let index = self.clamp(index);
        self.selection_start = index;
        self.selection_end = index;
    }

    /// Set both endpoints, each clamped independently.
    pub fn select(&mut self, start: usize, end: usize) {
        self.selection_start = self.clamp(start);
        self.selection_end = self.clamp(end);
    }

    pub fn select_range(&mut self, range: Range<usize>) {
        self.select(range.start, range.end);
    }

    pub fn select_all(&mut self) {
        self.select(0, self.len);
    }

    /// Normalized `min..max` selection.
    #[must_use]
    pub fn selection_range(&self) -> Range<usize> {
        let (a, b) = (self.selection_start, self.selection_end);
        if a <= b { a..b } else { b..a }
    }

    #[must_use]
    pub fn selection_len(&self) -> usize {
        self.selection_start.abs_diff(self.selection_end)
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.selection_start != self.selection_end
    }

    #[must_use]
    pub fn selection_text(&self) -> &str {
        let range = self.selection_range();
        let start = byte_offset(&self.content, range.start);
        let end = byte_offset(&self.content, range.end);
        &self.content[start..end]
    }

    /// Record of the current content and normalized selection.
    #[must_use]
    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot::new(self.content.clone(), self.selection_range())
    }

    /// Replace the content and reclamp both endpoints.
    pub(crate) fn replace_content(&mut self, content: String) {
        self.len = content.chars().count();
        self.content = content;
        self.select(self.selection_start, self.selection_end);
    }
}

/// Byte offset of char index `index` in `text`, or `text.len()` past the end.
#[must_use]
pub fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map_or(text.len(), |(offset, _)| offset)
}

/// `text` without the chars in `range` (clamped).
pub(crate) fn remove_chars(text: &str, range: Range<usize>) -> String {
    let start = byte_offset(text, range.start);
    let end = byte_offset(text, range.end.max(range.start));
    let mut out = String::with_capacity(text.len() - (end - start));
    out.push_str(&text[..start]);
    out.push_str(&text[end..]);
    out
}

/// `text` with `inserted` placed before char `index` (clamped to the end).
pub(crate) fn insert_chars(text: &str, index: usize, inserted: &str) -> String {
    let at = byte_offset(text, index);
    let mut out = String::with_capacity(text.len() + inserted.len());
    out.push_str(&text[..at]);
    out.push_str(inserted);
    out.push_str(&text[at..]);
    out
}

/// Extended grapheme cluster boundaries of `text`, as char indices.
///
/// Always starts with 0 and ends with the char count.
pub(crate) fn grapheme_boundaries(text: &str) -> Vec<usize> {
    let mut boundaries = Vec::with_capacity(text.len() + 1);
    let mut chars = 0;
    for grapheme in text.graphemes(true) {
        boundaries.push(chars);
        chars += grapheme.chars().count();
    }
    boundaries.push(chars);
    boundaries
}

/// Closest cluster boundary strictly before `index`.
pub(crate) fn previous_boundary(text: &str, index: usize) -> Option<usize> {
    grapheme_boundaries(text)
        .into_iter()
        .rev()
        .find(|&b| b < index)
}

/// Closest cluster boundary strictly after `index`.
pub(crate) fn next_boundary(text: &str, index: usize) -> Option<usize> {
    grapheme_boundaries(text).into_iter().find(|&b| b > index)
}
