//! Error types for the letterpress CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Every error is terminal for the run: components propagate them up to `main`,
//! which prints the message once and maps it to an exit code.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for letterpress operations.
///
/// Each variant corresponds to one failure family and maps to a stable
/// exit code. Nothing is retried; a failed run is simply re-executed.
#[derive(Error, Debug)]
pub enum LetterpressError {
    /// The memory directory does not exist.
    #[error("memory directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The memory directory exists but holds no matching letter files.
    #[error("no letter files found in {}", .0.display())]
    NoMatchingFiles(PathBuf),

    /// The memory directory or the selected memory file could not be read.
    #[error("failed to read '{}': {reason}", .path.display())]
    ReadError { path: PathBuf, reason: String },

    /// The API credential is absent from the environment.
    #[error("{0} not found in environment")]
    MissingCredential(String),

    /// The generation API call failed (transport, status, or empty response).
    #[error("generation request failed: {0}")]
    UpstreamError(String),

    /// The draft file could not be written.
    #[error("failed to write draft: {0}")]
    WriteError(String),
}

impl LetterpressError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LetterpressError::DirectoryNotFound(_)
            | LetterpressError::NoMatchingFiles(_)
            | LetterpressError::ReadError { .. } => exit_codes::LOCATE_FAILURE,
            LetterpressError::MissingCredential(_) => exit_codes::CONFIG_FAILURE,
            LetterpressError::UpstreamError(_) => exit_codes::UPSTREAM_FAILURE,
            LetterpressError::WriteError(_) => exit_codes::WRITE_FAILURE,
        }
    }
}

/// Result type alias for letterpress operations.
pub type Result<T> = std::result::Result<T, LetterpressError>;
