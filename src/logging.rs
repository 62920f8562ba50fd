//! Log file setup.
//!
//! The terminal belongs to the TUI, so tracing output goes to a file:
//! `<cache dir>/tensorwalk/tensorwalk.log` unless configured otherwise.
//! A configured path that can't be opened is an error; an unusable default
//! path only costs the log.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::TutorConfig;
use crate::error::{TutorError, TutorResult};

/// `<cache dir>/tensorwalk/tensorwalk.log`, if the platform has a cache dir.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("tensorwalk").join("tensorwalk.log"))
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> TutorResult<File> {
    let log_err = |source| TutorError::LogFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(log_err)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(log_err)
}

pub fn parse_filter(directives: &str) -> TutorResult<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| TutorError::Logging(e.to_string()))
}

/// Pick and open the log file. `configured` failures propagate; a failing
/// `fallback` prints a warning to stderr and yields `None`.
pub fn open_log_target(
    configured: Option<&Path>,
    fallback: Option<PathBuf>,
) -> TutorResult<Option<(PathBuf, File)>> {
    if let Some(path) = configured {
        let file = open_log_file(path)?;
        return Ok(Some((path.to_path_buf(), file)));
    }
    let Some(path) = fallback else {
        return Ok(None);
    };
    match open_log_file(&path) {
        Ok(file) => Ok(Some((path, file))),
        Err(err) => {
            eprintln!("warning: running without a log file: {err}");
            Ok(None)
        }
    }
}

/// Install the global subscriber. Returns the log path in use, or `None`
/// when there is nowhere to log.
pub fn init(config: &TutorConfig) -> TutorResult<Option<PathBuf>> {
    let filter = parse_filter(&config.log_filter)?;
    let Some((path, file)) = open_log_target(config.log_path.as_deref(), default_log_path())?
    else {
        return Ok(None);
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| TutorError::Logging(e.to_string()))?;

    Ok(Some(path))
}
