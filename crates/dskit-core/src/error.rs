//! Centralized error types for dskit.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dskit scanning operations.
#[derive(Error, Debug)]
pub enum DskitError {
    #[error("Components root not found: {}", .0.display())]
    ComponentsRootNotFound(PathBuf),

    #[error("Module '{module}' root not found: {}", .path.display())]
    ModuleRootNotFound { module: String, path: PathBuf },

    #[error("Failed to read source file {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for dskit operations.
pub type DskitResult<T> = Result<T, DskitError>;

impl DskitError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a source read error for the given path.
    pub fn read_source(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadSource {
            path: path.into(),
            source,
        }
    }
}
