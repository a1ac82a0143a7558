#![forbid(unsafe_code)]

//! Char and word boundary computation.
//!
//! Results are *not* clamped to the buffer; callers clamp when they apply an
//! index. Moving left from 0 saturates at 0, which clamps to the same place.
//!
//! # Word mode
//!
//! Word mode scans from `index + step` while the visited char is a letter or
//! digit. Moving right lands one past the end of the run. Moving left lands on
//! the first char of the run, except that when the very first probe is
//! already a non-word char the probe position itself is returned.

/// Horizontal movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    #[must_use]
    pub const fn step(self) -> isize {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Next cursor index from `index` in `direction`.
#[must_use]
pub fn next_index(text: &str, index: usize, direction: Direction, word: bool) -> usize {
    let step = direction.step();
    if !word {
        return index.saturating_add_signed(step);
    }

    let chars: Vec<char> = text.chars().collect();
    let start = isize::try_from(index).unwrap_or(isize::MAX - 1) + step;
    let mut idx = start;
    loop {
        let probe = usize::try_from(idx).ok().and_then(|i| chars.get(i));
        match probe {
            Some(&c) if is_word_char(c) => idx += step,
            Some(_) => {
                return match direction {
                    Direction::Left if idx == start => idx.unsigned_abs(),
                    Direction::Left => (idx - step).unsigned_abs(),
                    Direction::Right => idx.unsigned_abs(),
                };
            }
            // Off either end of the buffer.
            None => {
                return match direction {
                    Direction::Left => (idx - step).unsigned_abs(),
                    Direction::Right => idx.unsigned_abs(),
                };
            }
        }
    }
}

#[must_use]
pub fn left_index(text: &str, index: usize, word: bool) -> usize {
    next_index(text, index, Direction::Left, word)
}

#[must_use]
pub fn right_index(text: &str, index: usize, word: bool) -> usize {
    next_index(text, index, Direction::Right, word)
}

/// Line start (`0`) or end (char count), bypassing any scan.
#[must_use]
pub fn line_edge(text: &str, direction: Direction) -> usize {
    match direction {
        Direction::Left => 0,
        Direction::Right => text.chars().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_mode_steps_by_one() {
        assert_eq!(right_index("abc", 1, false), 2);
        assert_eq!(left_index("abc", 1, false), 0);
        // Unclamped past the end; saturating below zero.
        assert_eq!(right_index("abc", 3, false), 4);
        assert_eq!(left_index("abc", 0, false), 0);
    }

    #[test]
    fn word_right_stops_after_run() {
        assert_eq!(right_index("ab cd", 0, true), 2);
        assert_eq!(right_index("ab cd", 3, true), 5);
    }

    #[test]
    fn word_left_lands_on_run_start() {
        assert_eq!(left_index("ab cd", 5, true), 3);
        assert_eq!(left_index("ab cd", 2, true), 0);
    }

    #[test]
    fn word_left_on_separator_returns_probe() {
        // Char before index 3 is the space.
        assert_eq!(left_index("ab cd", 3, true), 2);
    }

    #[test]
    fn word_right_on_separator_returns_probe() {
        // Probe at 2 is the space.
        assert_eq!(right_index("ab cd", 1, true), 2);
    }

    #[test]
    fn word_mode_at_edges() {
        assert_eq!(left_index("abc", 0, true), 0);
        assert_eq!(right_index("abc", 3, true), 4);
        assert_eq!(left_index("", 0, true), 0);
        assert_eq!(right_index("", 0, true), 1);
    }

    #[test]
    fn hangul_syllables_are_word_chars() {
        assert_eq!(right_index("한글 입력", 0, true), 2);
        assert_eq!(left_index("한글 입력", 5, true), 3);
    }

    #[test]
    fn digits_are_word_chars() {
        assert_eq!(right_index("abc123-x", 0, true), 6);
    }

    #[test]
    fn line_edges() {
        assert_eq!(line_edge("가나다", Direction::Left), 0);
        assert_eq!(line_edge("가나다", Direction::Right), 3);
    }
}
