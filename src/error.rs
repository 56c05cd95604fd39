//! Error types for doclinks operations.
//!
//! This module defines [`DoclinksError`], the error type for failures that
//! abort a whole run, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Content problems in documents are never errors; they become
//!   [`Issue`](crate::check::Issue)s
//! - Use `DoclinksError` for process-level failures (missing target path,
//!   unreadable settings)
//! - Use `anyhow::Error` (via `DoclinksError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for doclinks operations.
#[derive(Debug, Error)]
pub enum DoclinksError {
    /// The path given on the command line does not exist.
    #[error("Path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    /// An explicitly requested settings file does not exist.
    #[error("Configuration not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse config at {}: {message}", path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for doclinks operations.
pub type Result<T> = std::result::Result<T, DoclinksError>;
