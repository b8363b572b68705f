use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for android-git-scanner operations
#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository not found: {}", .0.display())]
    RepositoryNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in android-git-scanner
pub type Result<T> = std::result::Result<T, ScannerError>;

impl ScannerError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ScannerError::Config(msg.into())
    }

    /// Create a missing-repository error for the given path
    pub fn repository_not_found(path: impl Into<PathBuf>) -> Self {
        ScannerError::RepositoryNotFound(path.into())
    }
}
