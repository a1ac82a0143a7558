#![forbid(unsafe_code)]

//! Caret visibility.
//!
//! Blinking is cosmetic: it never touches text state. Each blink step hides
//! the caret when unfocused, toggles it while it blinks, and pins it visible
//! otherwise. [`Caret::tick`] drives steps from a host clock.

use std::time::{Duration, Instant};

/// Default blink interval.
pub const DEFAULT_BLINK_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caret {
    visible: bool,
    interval: Duration,
    last_step: Option<Instant>,
}

impl Default for Caret {
    fn default() -> Self {
        Self::new(DEFAULT_BLINK_INTERVAL)
    }
}

impl Caret {
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            visible: false,
            interval,
            last_step: None,
        }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Show the caret iff focused, restarting the blink phase.
    ///
    /// Returns whether visibility changed.
    pub fn reset(&mut self, focused: bool) -> bool {
        self.last_step = None;
        self.set_visible(focused)
    }

    /// One blink step. Returns whether visibility changed.
    pub fn step(&mut self, focused: bool, blinking: bool) -> bool {
        let visible = if !focused {
            false
        } else if blinking {
            !self.visible
        } else {
            true
        };
        self.set_visible(visible)
    }

    /// Run a step once `interval` has elapsed since the last one.
    ///
    /// The first tick only starts the clock. Returns whether visibility
    /// changed.
    pub fn tick(&mut self, now: Instant, focused: bool, blinking: bool) -> bool {
        let Some(last) = self.last_step else {
            self.last_step = Some(now);
            return false;
        };
        if now.saturating_duration_since(last) < self.interval {
            return false;
        }
        self.last_step = Some(now);
        self.step(focused, blinking)
    }

    fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }
}
