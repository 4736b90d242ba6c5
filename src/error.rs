//! Error types for Filemap
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using FilemapError
pub type Result<T> = std::result::Result<T, FilemapError>;

/// Unified error type for Filemap operations
#[derive(Debug, Error)]
pub enum FilemapError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Database File Errors
    // -------------------------------------------------------------------------
    #[error("Data base file {} could not be found or created: {source}", .path.display())]
    DatabaseUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt database file: {0}")]
    CorruptFile(String),

    #[error("Error writing to file {}: {reason}", .path.display())]
    WriteFailure { path: PathBuf, reason: String },

    // -------------------------------------------------------------------------
    // Encoding Errors
    // -------------------------------------------------------------------------
    #[error("Offset {0} does not fit in a 32-bit offset field")]
    OffsetOverflow(u64),

    // -------------------------------------------------------------------------
    // Command Errors
    // -------------------------------------------------------------------------
    #[error(transparent)]
    Command(#[from] CommandError),
}

impl FilemapError {
    /// Shorthand for a `CorruptFile` error
    pub fn corrupt(reason: impl Into<String>) -> Self {
        FilemapError::CorruptFile(reason.into())
    }
}

/// A command the interpreter could not run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{command}: wrong number of arguments")]
    WrongArity { command: String },

    #[error("{0}: invalid command")]
    Unknown(String),
}
