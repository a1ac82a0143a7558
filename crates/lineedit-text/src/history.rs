#![forbid(unsafe_code)]

//! Linear undo/redo history.
//!
//! [`HistoryStack`] is an arena of entries plus a position. Each entry is the
//! state *before* an accepted edit, so the entry at `position - 1` is what
//! undo restores.
//!
//! # Invariants
//!
//! 1. `position <= entries.len()`.
//! 2. Pushing truncates every entry at or after `position` (a new edit after
//!    undo abandons the redo branch), then appends.
//! 3. After a push, `entries.len() <= config.max_depth` (oldest evicted).
//!
//! # Live state
//!
//! Entries only hold pre-edit states, so the state after the newest edit
//! lives nowhere in the arena. The first undo from the tail parks the caller's
//! current state there, which is what a later redo returns.
//!
//! ```text
//! push(s0) push(s1)       entries: [s0, s1]         position: 2
//! undo(live)              entries: [s0, s1, live]   position: 1  -> s1
//! redo()                  entries: [s0, s1, live]   position: 2  -> live
//! undo(..) undo(..)       entries: [s0, s1, live]   position: 0  -> s0
//! push(s0')               entries: [s0']            position: 1
//! ```

use std::collections::VecDeque;
use std::ops::Range;

use tracing::trace;

/// Limits for a history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum number of undoable edits kept.
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}

impl HistoryConfig {
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// No depth limit.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }
}

/// Content and normalized selection captured before an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySnapshot {
    pub text: String,
    pub selection: Range<usize>,
}

impl HistorySnapshot {
    #[must_use]
    pub fn new(text: impl Into<String>, selection: Range<usize>) -> Self {
        Self {
            text: text.into(),
            selection,
        }
    }
}

/// Position-indexed undo/redo list.
#[derive(Debug, Clone)]
pub struct HistoryStack<T = HistorySnapshot> {
    entries: VecDeque<T>,
    position: usize,
    config: HistoryConfig,
}

impl<T> Default for HistoryStack<T> {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl<T> HistoryStack<T> {
    #[must_use]
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            entries: VecDeque::new(),
            position: 0,
            config,
        }
    }

    /// Record the state before a new edit.
    pub fn push(&mut self, entry: T) {
        self.entries.truncate(self.position);
        self.entries.push_back(entry);
        self.position = self.entries.len();
        self.enforce_depth();
    }

    /// Step back one entry.
    ///
    /// `current` is the caller's live state; it is kept only when undoing
    /// from the tail so that redo can come back to it. Returns `None` at the
    /// oldest position.
    pub fn undo(&mut self, current: T) -> Option<&T> {
        if self.position == 0 {
            return None;
        }
        if self.position == self.entries.len() {
            self.entries.push_back(current);
        }
        self.position -= 1;
        self.entries.get(self.position)
    }

    /// Step forward one entry. Returns `None` at the newest position.
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.position += 1;
        self.entries.get(self.position)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.position > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.position + 1 < self.entries.len()
    }

    /// Number of edits that can be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.position
    }

    /// Number of edits that can be redone.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.entries.len().saturating_sub(self.position + 1)
    }

    /// Entries currently stored, including a parked live state.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.position = 0;
    }

    fn enforce_depth(&mut self) {
        while self.entries.len() > self.config.max_depth {
            if self.entries.pop_front().is_none() {
                break;
            }
            self.position = self.position.saturating_sub(1);
            trace!(
                max_depth = self.config.max_depth,
                "history evicted oldest entry"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stack_is_empty() {
        let mut stack: HistoryStack<u32> = HistoryStack::default();
        assert!(stack.is_empty());
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
        assert_eq!(stack.undo(7), None);
        assert_eq!(stack.redo(), None);
        // A failed undo must not park the live state.
        assert!(stack.is_empty());
    }

    #[test]
    fn undo_returns_pre_edit_state() {
        let mut stack = HistoryStack::default();
        stack.push(0);
        stack.push(1);
        assert_eq!(stack.undo(2), Some(&1));
        assert_eq!(stack.undo(1), Some(&0));
        assert_eq!(stack.undo(0), None);
    }

    #[test]
    fn redo_returns_to_live_state() {
        let mut stack = HistoryStack::default();
        stack.push(0);
        assert_eq!(stack.undo(1), Some(&0));
        assert!(stack.can_redo());
        assert_eq!(stack.redo(), Some(&1));
        assert!(!stack.can_redo());
        assert_eq!(stack.redo(), None);
    }

    #[test]
    fn undo_redo_cycle_does_not_grow() {
        let mut stack = HistoryStack::default();
        stack.push(0);
        stack.push(1);
        stack.undo(2);
        stack.undo(1);
        stack.redo();
        stack.redo();
        stack.undo(2);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.undo_depth(), 1);
        assert_eq!(stack.redo_depth(), 1);
    }

    #[test]
    fn push_after_undo_discards_redo_branch() {
        let mut stack = HistoryStack::default();
        stack.push("a");
        stack.push("b");
        stack.undo("c");
        stack.push("b2");
        assert!(!stack.can_redo());
        assert_eq!(stack.redo(), None);
        assert_eq!(stack.undo("d"), Some(&"b2"));
        assert_eq!(stack.undo("b2"), Some(&"a"));
    }

    #[test]
    fn max_depth_evicts_oldest() {
        let mut stack = HistoryStack::new(HistoryConfig::new(3));
        for i in 0..5 {
            stack.push(i);
        }
        assert_eq!(stack.undo_depth(), 3);
        assert_eq!(stack.undo(5), Some(&4));
        assert_eq!(stack.undo(4), Some(&3));
        assert_eq!(stack.undo(3), Some(&2));
        assert_eq!(stack.undo(2), None);
    }

    #[test]
    fn zero_depth_keeps_nothing() {
        let mut stack = HistoryStack::new(HistoryConfig::new(0));
        stack.push(1);
        assert!(stack.is_empty());
        assert!(!stack.can_undo());
    }

    #[test]
    fn clear_resets_position() {
        let mut stack = HistoryStack::default();
        stack.push(1);
        stack.undo(2);
        stack.clear();
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
        assert!(stack.is_empty());
    }

    #[test]
    fn config_defaults() {
        assert_eq!(HistoryConfig::default().max_depth, 1000);
        assert_eq!(HistoryConfig::unlimited().max_depth, usize::MAX);
        let stack: HistoryStack<u8> = HistoryStack::new(HistoryConfig::new(4));
        assert_eq!(stack.config().max_depth, 4);
    }
}
