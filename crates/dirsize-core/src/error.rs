//! Error types for scanning and request validation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that make the scanned root unreadable.
///
/// Failures below the root never surface here: unreadable children are
/// dropped and failed subtrees report a size of zero.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Root path is not a directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The worker pool could not be started.
    #[error("Failed to start scan workers: {message}")]
    WorkerPool { message: String },
}

impl ScanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::Io { path, source },
        }
    }

    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::PermissionDenied { path }
            | Self::NotFound { path }
            | Self::NotADirectory { path }
            | Self::Io { path, .. } => Some(path),
            Self::WorkerPool { .. } => None,
        }
    }
}

/// Invalid scan parameters, rejected before the filesystem is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// No root directory was given.
    #[error("Root directory is not specified (root)")]
    MissingRoot,

    /// Sort direction is neither `asc` nor `desc`.
    #[error("Invalid sort direction '{value}': use 'asc' or 'desc'")]
    InvalidSortDirection { value: String },
}
