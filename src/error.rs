//! Error types for the buildsum library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for buildsum operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering or publishing reports.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error while serializing a report to an output format.
    #[error("Rendering error: {0}")]
    Render(String),

    /// A rendered report could not be written to disk.
    ///
    /// Carries the format name and target path so the caller can log which
    /// output failed and decide on exit behavior.
    #[error("Failed to persist {format} report to {path}: {source}")]
    Persist {
        /// Name of the format whose output failed to persist.
        format: &'static str,
        /// Path the publisher attempted to write.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Error reading or decoding a build record.
    #[error("Build record error: {0}")]
    Record(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Record(err.to_string())
    }
}
