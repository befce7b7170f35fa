//! Unified error types for linkpack.
//!
//! This module provides a single [`LinkpackError`] enum covering every hard
//! failure in the library, plus [`FetchError`] for the injected fetch and
//! download capabilities.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Per-link problems** (bad link, fetch failure, message not found) are
//!   never hard failures: the batch loop converts them to warnings and keeps
//!   going. Only I/O, serialization, and input-validation problems surface
//!   as [`LinkpackError`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for linkpack operations.
///
/// # Example
///
/// ```rust
/// use linkpack::error::Result;
/// use linkpack::record::PostRecord;
///
/// fn my_function() -> Result<Vec<PostRecord>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, LinkpackError>;

/// The error type for all linkpack operations.
///
/// Each variant carries context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LinkpackError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - A links or snapshot file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse a snapshot capture file.
    #[error("Failed to parse snapshot{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Snapshot {
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// CSV writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Archive construction error.
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// UTF-8 encoding error.
    ///
    /// Occurs when converting in-memory output buffers to strings.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Invalid user input that is not a per-link problem.
    ///
    /// For example an empty link list, where there is no batch to run at all.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of what's wrong
        message: String,
    },
}

impl From<std::string::FromUtf8Error> for LinkpackError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        LinkpackError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

impl LinkpackError {
    /// Creates a snapshot parse error.
    pub fn snapshot_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        LinkpackError::Snapshot { source, path }
    }

    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        LinkpackError::InvalidInput {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, LinkpackError::Io(_))
    }

    /// Returns `true` if this is a snapshot parse error.
    pub fn is_snapshot(&self) -> bool {
        matches!(self, LinkpackError::Snapshot { .. })
    }

    /// Returns `true` if this is an invalid input error.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, LinkpackError::InvalidInput { .. })
    }
}

/// Error returned by the injected fetch and download capabilities.
///
/// The batch loop never propagates these: each one becomes a per-link
/// warning and processing continues with the remaining links.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// Transport-level failure (network down, timeout, disconnect).
    #[error("{0}")]
    Transport(String),

    /// The session is not allowed to read the referenced chat.
    #[error("permission denied: {0}")]
    Permission(String),

    /// Any other capability-side failure.
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        FetchError::Transport(message.into())
    }

    /// Creates a permission error.
    pub fn permission(message: impl Into<String>) -> Self {
        FetchError::Permission(message.into())
    }

    /// Creates a generic capability error.
    pub fn other(message: impl Into<String>) -> Self {
        FetchError::Other(message.into())
    }
}
