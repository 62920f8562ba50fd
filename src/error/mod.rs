//! Error handling for tensorwalk.
//!
//! Navigation itself never fails: out-of-range requests are silently ignored
//! by the controller and by every track panel. The errors defined here cover
//! the things that can legitimately go wrong around it:
//!
//! | Kind | Examples | Recoverable |
//! |------|----------|-------------|
//! | Configuration | empty outline, unknown start step, empty track | No (fatal at startup) |
//! | Usage | bad command-line arguments | No (print usage and exit) |
//! | System | terminal I/O, log file creation | No |
//!
//! Library code returns [`TutorResult`]; the binary converts into
//! `color_eyre::Report` with `?`.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias used throughout the library.
pub type TutorResult<T> = Result<T, TutorError>;

/// Unified error type for tensorwalk.
#[derive(Debug, Error)]
pub enum TutorError {
    /// An outline was built without a single step.
    #[error("tutorial outline has no steps")]
    EmptyOutline,

    /// A chapter was declared without any steps.
    #[error("chapter '{title}' has no steps")]
    EmptyChapter { title: String },

    /// Two steps share the same identifier.
    #[error("duplicate step id '{0}'")]
    DuplicateStepId(String),

    /// The requested start index does not exist.
    #[error("start step {index} is out of range (outline has {total} steps)")]
    StartOutOfRange { index: usize, total: usize },

    /// The requested start step id does not exist.
    #[error("unknown step '{0}'")]
    UnknownStep(String),

    /// A track panel was built from an empty catalog.
    #[error("track panel has no tracks")]
    NoTracks,

    /// A track in a track panel has no sub-steps.
    #[error("track {track} has no sub-steps")]
    EmptyTrack { track: usize },

    /// Bad command-line usage.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The log file could not be opened.
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tracing subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),

    /// Terminal or other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failure (outline listing, state snapshots).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TutorError {
    /// Whether this error comes from a malformed outline, catalog or start
    /// selection. These are rejected once at construction time.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            TutorError::EmptyOutline
                | TutorError::EmptyChapter { .. }
                | TutorError::DuplicateStepId(_)
                | TutorError::StartOutOfRange { .. }
                | TutorError::UnknownStep(_)
                | TutorError::NoTracks
                | TutorError::EmptyTrack { .. }
        )
    }

    /// Whether the user should be shown the usage text.
    pub fn is_usage(&self) -> bool {
        matches!(self, TutorError::InvalidArgument(_))
    }

    /// Short machine-readable code, written to the log alongside the message.
    pub fn error_code(&self) -> &'static str {
        match self {
            TutorError::EmptyOutline => "OUTLINE_EMPTY",
            TutorError::EmptyChapter { .. } => "CHAPTER_EMPTY",
            TutorError::DuplicateStepId(_) => "STEP_DUPLICATE",
            TutorError::StartOutOfRange { .. } => "START_OUT_OF_RANGE",
            TutorError::UnknownStep(_) => "STEP_UNKNOWN",
            TutorError::NoTracks => "TRACKS_EMPTY",
            TutorError::EmptyTrack { .. } => "TRACK_EMPTY",
            TutorError::InvalidArgument(_) => "INVALID_ARGUMENT",
            TutorError::LogFile { .. } => "LOG_FILE",
            TutorError::Logging(_) => "LOGGING",
            TutorError::Io(_) => "IO",
            TutorError::Json(_) => "JSON",
        }
    }
}
