use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for template rewriting operations
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to access {path:?}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Target directory not found: {path:?}")]
    MissingDirectory { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Project root not found from {start:?} (no ancestor contains a src/ directory)")]
    ProjectRootNotFound { start: PathBuf },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: String, value: String },
}

/// Result type alias for rewrite operations
pub type RewriteResult<T> = Result<T, RewriteError>;

/// Attach the offending path to an I/O failure
pub trait PathContext<T> {
    fn with_path(self, path: &Path) -> RewriteResult<T>;
}

impl<T> PathContext<T> for Result<T, io::Error> {
    fn with_path(self, path: &Path) -> RewriteResult<T> {
        self.map_err(|source| RewriteError::FileAccess {
            path: path.to_path_buf(),
            source,
        })
    }
}
