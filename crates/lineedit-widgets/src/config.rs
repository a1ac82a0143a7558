#![forbid(unsafe_code)]

//! Text input configuration.
//!
//! # Environment
//!
//! | variable | field | values |
//! |---|---|---|
//! | `LINEEDIT_SENTINEL_SPACE` | `sentinel_space` | `1/0/true/false/yes/no/on/off` |
//! | `LINEEDIT_CARET_BLINK_MS` | `caret_blink` | milliseconds, > 0 |
//! | `LINEEDIT_HISTORY_DEPTH` | `history` | integer or `unlimited` |
//! | `LINEEDIT_PLATFORM` | `platform` | `apple`, `other` |
//!
//! Invalid values keep the default and are reported in
//! [`TextInputConfigParse::errors`].

use std::env;
use std::fmt;
use std::time::Duration;

use lineedit_core::Platform;
use lineedit_text::HistoryConfig;

use crate::caret::DEFAULT_BLINK_INTERVAL;

pub const ENV_SENTINEL_SPACE: &str = "LINEEDIT_SENTINEL_SPACE";
pub const ENV_CARET_BLINK_MS: &str = "LINEEDIT_CARET_BLINK_MS";
pub const ENV_HISTORY_DEPTH: &str = "LINEEDIT_HISTORY_DEPTH";
pub const ENV_PLATFORM: &str = "LINEEDIT_PLATFORM";

/// Settings for a [`TextInput`](crate::TextInput).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextInputConfig {
    /// Keep a leading sentinel space in the buffer.
    pub sentinel_space: bool,
    pub caret_blink: Duration,
    pub history: HistoryConfig,
    pub platform: Platform,
}

impl Default for TextInputConfig {
    fn default() -> Self {
        Self {
            sentinel_space: false,
            caret_blink: DEFAULT_BLINK_INTERVAL,
            history: HistoryConfig::default(),
            platform: Platform::current(),
        }
    }
}

/// Parsed config plus every rejected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInputConfigParse {
    pub config: TextInputConfig,
    pub errors: Vec<ConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl TextInputConfig {
    #[must_use]
    pub fn with_sentinel_space(mut self, enabled: bool) -> Self {
        self.sentinel_space = enabled;
        self
    }

    #[must_use]
    pub fn with_caret_blink(mut self, interval: Duration) -> Self {
        self.caret_blink = interval;
        self
    }

    #[must_use]
    pub fn with_history(mut self, history: HistoryConfig) -> Self {
        self.history = history;
        self
    }

    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> TextInputConfigParse {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Parse config through `get`, which maps a variable name to its value.
    pub fn from_env_with<F>(mut get: F) -> TextInputConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(value) = get(ENV_SENTINEL_SPACE) {
            match parse_bool(&value) {
                Some(parsed) => config.sentinel_space = parsed,
                None => errors.push(ConfigError::new(
                    "sentinel_space",
                    value,
                    "expected bool (1/0/true/false)",
                )),
            }
        }

        if let Some(value) = get(ENV_CARET_BLINK_MS) {
            match parse_u64(&value).filter(|&ms| ms > 0) {
                Some(ms) => config.caret_blink = Duration::from_millis(ms),
                None => errors.push(ConfigError::new(
                    "caret_blink",
                    value,
                    "expected positive integer (milliseconds)",
                )),
            }
        }

        if let Some(value) = get(ENV_HISTORY_DEPTH) {
            match parse_depth(&value) {
                Some(parsed) => config.history = parsed,
                None => errors.push(ConfigError::new(
                    "history_depth",
                    value,
                    "expected integer or unlimited",
                )),
            }
        }

        if let Some(value) = get(ENV_PLATFORM) {
            match Platform::parse(&value) {
                Some(parsed) => config.platform = parsed,
                None => errors.push(ConfigError::new("platform", value, "expected apple|other")),
            }
        }

        TextInputConfigParse { config, errors }
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        if self.caret_blink.is_zero() {
            errors.push(ConfigError::new(
                "caret_blink",
                format!("{:?}", self.caret_blink),
                "must be > 0",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[inline]
fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

fn parse_depth(value: &str) -> Option<HistoryConfig> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("unlimited") {
        return Some(HistoryConfig::unlimited());
    }
    value.parse::<usize>().ok().map(HistoryConfig::new)
}
