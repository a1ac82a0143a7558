#![forbid(unsafe_code)]

//! Base char + combining mark composition through canonical composition.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::{GraphemeComposer, fold_pairs};

/// Composes a base char and a following combining mark into the precomposed
/// char NFC defines for them, e.g. `e` + U+0301 into `é`.
///
/// Pairs without a precomposed form are left alone so the editor inserts the
/// mark as typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombiningMarkComposer;

impl GraphemeComposer for CombiningMarkComposer {
    fn compose(&self, pair: &str) -> Option<String> {
        fold_pairs(pair, compose_mark)
    }
}

fn compose_mark(base: char, mark: char) -> Option<String> {
    if !is_combining_mark(mark) {
        return None;
    }
    let composed: String = [base, mark].into_iter().nfc().collect();
    (composed.chars().count() == 1).then_some(composed)
}
