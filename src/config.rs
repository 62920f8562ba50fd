//! Session configuration.
//!
//! Built with the `with_*` methods, seeded from the environment by
//! [`TutorConfig::from_env`], then overridden by command-line flags.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{TutorError, TutorResult};
use crate::nav::Outline;

pub const ENV_START: &str = "TENSORWALK_START";
pub const ENV_FLAT: &str = "TENSORWALK_FLAT";
pub const ENV_LOG: &str = "TENSORWALK_LOG";
pub const ENV_LOG_FILE: &str = "TENSORWALK_LOG_FILE";
pub const ENV_TICK_MS: &str = "TENSORWALK_TICK_MS";

pub const DEFAULT_LOG_FILTER: &str = "tensorwalk=info";
/// ~60fps
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(16);

/// Configuration for one tutorial session.
///
/// # Example
///
/// ```
/// use tensorwalk::config::TutorConfig;
///
/// let config = TutorConfig::default()
///     .with_start("rank")
///     .with_sidebar(false);
/// assert_eq!(config.start.as_deref(), Some("rank"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TutorConfig {
    /// Step id or zero-based index to open first
    pub start: Option<String>,
    /// Chapter sidebar visible (false = flat layout)
    pub show_sidebar: bool,
    /// Event loop tick
    pub tick_rate: Duration,
    /// `EnvFilter` directive for the log file
    pub log_filter: String,
    /// Log file override; defaults to the user cache directory
    pub log_path: Option<PathBuf>,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            start: None,
            show_sidebar: true,
            tick_rate: DEFAULT_TICK_RATE,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_path: None,
        }
    }
}

impl TutorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn with_sidebar(mut self, show: bool) -> Self {
        self.show_sidebar = show;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    /// Defaults overridden by `TENSORWALK_*` variables. Unparseable tick
    /// values fall back to the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(start) = non_empty_var(ENV_START) {
            config = config.with_start(start);
        }
        if let Some(flat) = non_empty_var(ENV_FLAT) {
            config = config.with_sidebar(!is_truthy(&flat));
        }
        if let Some(filter) = non_empty_var(ENV_LOG) {
            config = config.with_log_filter(filter);
        }
        if let Some(path) = non_empty_var(ENV_LOG_FILE) {
            config = config.with_log_path(path);
        }
        if let Some(ms) = non_empty_var(ENV_TICK_MS).and_then(|v| v.parse::<u64>().ok()) {
            if ms > 0 {
                config = config.with_tick_rate(Duration::from_millis(ms));
            }
        }
        config
    }

    /// Turn [`start`](Self::start) into a step index. Accepts a step id or a
    /// zero-based index; no start means the first step.
    ///
    /// # Errors
    ///
    /// [`TutorError::StartOutOfRange`] for an index past the end,
    /// [`TutorError::UnknownStep`] for an id not in the outline.
    pub fn resolve_start<C>(&self, outline: &Outline<C>) -> TutorResult<usize> {
        let Some(start) = self.start.as_deref() else {
            return Ok(0);
        };
        if let Ok(index) = start.parse::<usize>() {
            if index >= outline.len() {
                return Err(TutorError::StartOutOfRange {
                    index,
                    total: outline.len(),
                });
            }
            return Ok(index);
        }
        outline
            .position_of(start)
            .ok_or_else(|| TutorError::UnknownStep(start.to_string()))
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
