#![forbid(unsafe_code)]

//! Grapheme composition collaborators.
//!
//! A [`GraphemeComposer`] receives the char before the cursor followed by the
//! newly typed input and either returns the text that should replace both, or
//! `None` when the script defines no combination. Composers are pure: the
//! editor owns all state.
//!
//! The built-in composers merge pairwise from left to right, so pasted input
//! such as `ㄱ` + `ㅏㄴ` composes as a whole (`간`).
//!
//! | composer | script rule |
//! |---|---|
//! | [`HangulComposer`] | Hangul compatibility jamo into syllable blocks |
//! | `CombiningMarkComposer` | base + combining mark into a precomposed char (feature `normalization`) |
//! | [`NoComposition`] | never combines |
//!
//! Any `Fn(&str) -> Option<String>` closure is also a composer.

mod hangul;

#[cfg(feature = "normalization")]
mod combining;

pub use hangul::HangulComposer;

#[cfg(feature = "normalization")]
pub use combining::CombiningMarkComposer;

/// Combines the previous char with new input.
pub trait GraphemeComposer {
    /// Replacement for `pair` (previous char + input), or `None`.
    fn compose(&self, pair: &str) -> Option<String>;
}

impl<F> GraphemeComposer for F
where
    F: Fn(&str) -> Option<String>,
{
    fn compose(&self, pair: &str) -> Option<String> {
        self(pair)
    }
}

/// Composer that never combines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoComposition;

impl GraphemeComposer for NoComposition {
    fn compose(&self, _pair: &str) -> Option<String> {
        None
    }
}

/// Fold `text` left to right, merging each char into the tail of the result
/// through `merge`. `None` when no pair merged.
fn fold_pairs<F>(text: &str, merge: F) -> Option<String>
where
    F: Fn(char, char) -> Option<String>,
{
    let mut chars = text.chars();
    let mut out = String::from(chars.next()?);
    let mut merged = false;
    for next in chars {
        match out.chars().next_back().and_then(|last| merge(last, next)) {
            Some(replacement) => {
                out.pop();
                out.push_str(&replacement);
                merged = true;
            }
            None => out.push(next),
        }
    }
    merged.then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_composition_never_combines() {
        assert_eq!(NoComposition.compose("ㄱㅏ"), None);
    }

    #[test]
    fn closures_are_composers() {
        let upper = |pair: &str| (pair == "ab").then(|| "X".to_string());
        assert_eq!(upper.compose("ab"), Some("X".to_string()));
        assert_eq!(upper.compose("ba"), None);
    }

    #[test]
    fn boxed_composer_dispatches() {
        let boxed: Box<dyn GraphemeComposer> = Box::new(HangulComposer);
        assert_eq!(boxed.compose("ㄱㅏ"), Some("가".to_string()));
    }

    fn upper_pair(a: char, b: char) -> Option<String> {
        (a == b).then(|| a.to_uppercase().collect())
    }

    #[test]
    fn fold_merges_into_tail() {
        assert_eq!(fold_pairs("aab", upper_pair).as_deref(), Some("Ab"));
        assert_eq!(fold_pairs("xaa", upper_pair).as_deref(), Some("xA"));
    }

    #[test]
    fn fold_without_merge_is_none() {
        assert_eq!(fold_pairs("", upper_pair), None);
        assert_eq!(fold_pairs("a", upper_pair), None);
        assert_eq!(fold_pairs("abc", upper_pair), None);
    }
}
