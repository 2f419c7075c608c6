//! Error types for codetallylib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while surveying a source tree
#[derive(Error, Debug)]
pub enum TallyError {
    /// Scan root does not exist or is not a directory
    #[error("scan root does not exist: {0}")]
    RootNotFound(PathBuf),

    /// Scan root exists but cannot be read
    #[error("cannot read scan root '{path}': {source}")]
    RootUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
