#![forbid(unsafe_code)]

//! Hangul compatibility-jamo composition.
//!
//! Syllable blocks are computed arithmetically:
//! `U+AC00 + (initial * 21 + medial) * 28 + final`.
//!
//! Rules, for previous char `p` and typed char `n`:
//!
//! | `p` | `n` | result |
//! |---|---|---|
//! | initial consonant | vowel | `ㄱ` + `ㅏ` → `가` |
//! | vowel | vowel | compound vowel, `ㅗ` + `ㅏ` → `ㅘ` |
//! | open syllable | vowel | compound medial, `고` + `ㅏ` → `과` |
//! | open syllable | consonant | final consonant, `가` + `ㄴ` → `간` |
//! | closed syllable | consonant | compound final, `달` + `ㄱ` → `닭` |
//! | closed syllable | vowel | final moves on, `각` + `ㅏ` → `가가` |

use super::{GraphemeComposer, fold_pairs};

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_COUNT: u32 = 11172;
const MEDIAL_COUNT: u32 = 21;
const FINAL_COUNT: u32 = 28;
const VOWEL_FIRST: u32 = 0x314F;
const VOWEL_LAST: u32 = 0x3163;

const INITIALS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// Final consonants; index + 1 is the syllable's final slot (0 = none).
const FINALS: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ',
    'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

const COMPOUND_VOWELS: [(char, char, char); 7] = [
    ('ㅗ', 'ㅏ', 'ㅘ'),
    ('ㅗ', 'ㅐ', 'ㅙ'),
    ('ㅗ', 'ㅣ', 'ㅚ'),
    ('ㅜ', 'ㅓ', 'ㅝ'),
    ('ㅜ', 'ㅔ', 'ㅞ'),
    ('ㅜ', 'ㅣ', 'ㅟ'),
    ('ㅡ', 'ㅣ', 'ㅢ'),
];

const COMPOUND_FINALS: [(char, char, char); 11] = [
    ('ㄱ', 'ㅅ', 'ㄳ'),
    ('ㄴ', 'ㅈ', 'ㄵ'),
    ('ㄴ', 'ㅎ', 'ㄶ'),
    ('ㄹ', 'ㄱ', 'ㄺ'),
    ('ㄹ', 'ㅁ', 'ㄻ'),
    ('ㄹ', 'ㅂ', 'ㄼ'),
    ('ㄹ', 'ㅅ', 'ㄽ'),
    ('ㄹ', 'ㅌ', 'ㄾ'),
    ('ㄹ', 'ㅍ', 'ㄿ'),
    ('ㄹ', 'ㅎ', 'ㅀ'),
    ('ㅂ', 'ㅅ', 'ㅄ'),
];

/// Composes Hangul compatibility jamo into syllable blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HangulComposer;

impl GraphemeComposer for HangulComposer {
    fn compose(&self, pair: &str) -> Option<String> {
        fold_pairs(pair, compose_pair)
    }
}

fn initial_index(c: char) -> Option<u32> {
    INITIALS.iter().position(|&j| j == c).map(|i| i as u32)
}

fn medial_index(c: char) -> Option<u32> {
    let code = u32::from(c);
    (VOWEL_FIRST..=VOWEL_LAST)
        .contains(&code)
        .then(|| code - VOWEL_FIRST)
}

fn final_index(c: char) -> Option<u32> {
    FINALS.iter().position(|&j| j == c).map(|i| i as u32 + 1)
}

fn medial_jamo(medial: u32) -> Option<char> {
    char::from_u32(VOWEL_FIRST + medial)
}

fn syllable(initial: u32, medial: u32, fin: u32) -> Option<char> {
    char::from_u32(SYLLABLE_BASE + (initial * MEDIAL_COUNT + medial) * FINAL_COUNT + fin)
}

/// `(initial, medial, final)` of a precomposed syllable.
fn decompose(c: char) -> Option<(u32, u32, u32)> {
    let offset = u32::from(c).checked_sub(SYLLABLE_BASE)?;
    if offset >= SYLLABLE_COUNT {
        return None;
    }
    let fin = offset % FINAL_COUNT;
    let medial = (offset / FINAL_COUNT) % MEDIAL_COUNT;
    let initial = offset / (FINAL_COUNT * MEDIAL_COUNT);
    Some((initial, medial, fin))
}

fn compound_vowel(first: char, second: char) -> Option<char> {
    COMPOUND_VOWELS
        .iter()
        .find(|&&(a, b, _)| a == first && b == second)
        .map(|&(_, _, c)| c)
}

fn compound_final(first: char, second: char) -> Option<char> {
    COMPOUND_FINALS
        .iter()
        .find(|&&(a, b, _)| a == first && b == second)
        .map(|&(_, _, c)| c)
}

/// Split a final into the part that stays and the consonant that moves on.
fn split_final(fin: char) -> (Option<char>, char) {
    COMPOUND_FINALS
        .iter()
        .find(|&&(_, _, c)| c == fin)
        .map_or((None, fin), |&(a, b, _)| (Some(a), b))
}

fn compose_pair(prev: char, next: char) -> Option<String> {
    if let Some(initial) = initial_index(prev) {
        let medial = medial_index(next)?;
        return syllable(initial, medial, 0).map(String::from);
    }
    if medial_index(prev).is_some() {
        return compound_vowel(prev, next).map(String::from);
    }

    let (initial, medial, fin) = decompose(prev)?;
    if fin == 0 {
        let vowel = medial_jamo(medial)?;
        if let Some(compound) = compound_vowel(vowel, next) {
            return syllable(initial, medial_index(compound)?, 0).map(String::from);
        }
        let fin = final_index(next)?;
        return syllable(initial, medial, fin).map(String::from);
    }

    let final_jamo = FINALS[(fin - 1) as usize];
    if let Some(next_medial) = medial_index(next) {
        let (kept, moved) = split_final(final_jamo);
        let kept = match kept {
            Some(k) => final_index(k)?,
            None => 0,
        };
        let first = syllable(initial, medial, kept)?;
        let second = syllable(initial_index(moved)?, next_medial, 0)?;
        return Some([first, second].iter().collect());
    }
    let compound = compound_final(final_jamo, next)?;
    syllable(initial, medial, final_index(compound)?).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compose(pair: &str) -> Option<String> {
        HangulComposer.compose(pair)
    }

    #[test]
    fn consonant_and_vowel_form_syllable() {
        assert_eq!(compose("ㄱㅏ").as_deref(), Some("가"));
        assert_eq!(compose("ㅎㅏ").as_deref(), Some("하"));
        assert_eq!(compose("ㅇㅣ").as_deref(), Some("이"));
    }

    #[test]
    fn open_syllable_takes_final() {
        assert_eq!(compose("가ㄴ").as_deref(), Some("간"));
        assert_eq!(compose("하ㅂ").as_deref(), Some("합"));
    }

    #[test]
    fn doubled_consonant_cannot_be_final() {
        assert_eq!(compose("가ㄸ"), None);
        assert_eq!(compose("가ㅃ"), None);
    }

    #[test]
    fn compound_vowels() {
        assert_eq!(compose("ㅗㅏ").as_deref(), Some("ㅘ"));
        assert_eq!(compose("고ㅏ").as_deref(), Some("과"));
        assert_eq!(compose("그ㅣ").as_deref(), Some("긔"));
        assert_eq!(compose("ㅏㅗ"), None);
    }

    #[test]
    fn compound_finals() {
        assert_eq!(compose("달ㄱ").as_deref(), Some("닭"));
        assert_eq!(compose("갑ㅅ").as_deref(), Some("값"));
        assert_eq!(compose("각ㄱ"), None);
    }

    #[test]
    fn final_moves_to_next_syllable() {
        assert_eq!(compose("각ㅏ").as_deref(), Some("가가"));
        assert_eq!(compose("닭ㅏ").as_deref(), Some("달가"));
        assert_eq!(compose("값ㅣ").as_deref(), Some("갑시"));
    }

    #[test]
    fn unrelated_chars_do_not_compose() {
        assert_eq!(compose("ab"), None);
        assert_eq!(compose("ㄱㄴ"), None);
        assert_eq!(compose("가a"), None);
        assert_eq!(compose(" ㅏ"), None);
        assert_eq!(compose("ㄱ"), None);
    }

    #[test]
    fn longer_input_folds_pairwise() {
        assert_eq!(compose("ㅎㅏㄴㄱㅡㄹ").as_deref(), Some("한글"));
        assert_eq!(compose("ㄱㅏㅏ").as_deref(), Some("가ㅏ"));
        assert_eq!(compose("각ㅏㄴ").as_deref(), Some("가간"));
        assert_eq!(compose("abㄱ"), None);
    }

    #[test]
    fn every_initial_vowel_pair_is_one_syllable() {
        for initial in INITIALS {
            for code in VOWEL_FIRST..=VOWEL_LAST {
                let vowel = char::from_u32(code).unwrap();
                let pair: String = [initial, vowel].iter().collect();
                let composed = compose(&pair).unwrap();
                assert_eq!(composed.chars().count(), 1, "{pair}");
                let (l, v, t) = decompose(composed.chars().next().unwrap()).unwrap();
                assert_eq!(INITIALS[l as usize], initial);
                assert_eq!(medial_jamo(v), Some(vowel));
                assert_eq!(t, 0);
            }
        }
    }

    #[test]
    fn decompose_rejects_non_syllables() {
        assert_eq!(decompose('a'), None);
        assert_eq!(decompose('ㄱ'), None);
        assert_eq!(decompose('\u{D7A4}'), None);
        assert_eq!(decompose('가'), Some((0, 0, 0)));
        assert_eq!(decompose('힣'), Some((18, 20, 27)));
    }
}
