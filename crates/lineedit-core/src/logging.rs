#![forbid(unsafe_code)]

//! Logging facade.
//!
//! Library code logs through `tracing`; installing a subscriber is the host's
//! call. With the `tracing-json` feature, [`init_json_subscriber`] installs a
//! JSON formatter filtered by the `LINEEDIT_LOG` environment variable.

#[cfg(feature = "tracing")]
pub use tracing::{debug, error, info, trace, warn};

use std::fmt;

/// Environment variable holding the log filter directive.
pub const LOG_FILTER_ENV: &str = "LINEEDIT_LOG";

/// Failure to install the global subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingError {
    message: String,
}

impl LoggingError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to install log subscriber: {}", self.message)
    }
}

impl std::error::Error for LoggingError {}

/// Install a global JSON subscriber.
///
/// The filter comes from `LINEEDIT_LOG` when set and parseable, otherwise
/// from `default_filter` (e.g. `"lineedit_text=debug"`).
///
/// # Errors
///
/// Returns [`LoggingError`] when a global subscriber is already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber(default_filter: &str) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| LoggingError::new(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_mentions_cause() {
        let err = LoggingError::new("already set");
        assert_eq!(
            err.to_string(),
            "failed to install log subscriber: already set"
        );
    }

    #[cfg(feature = "tracing-json")]
    #[test]
    fn second_install_fails() {
        // The first call may lose the race with another test's subscriber.
        let _ = init_json_subscriber("debug");
        assert!(init_json_subscriber("debug").is_err());
    }
}
