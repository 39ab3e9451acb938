//! Error types for `foldertabs-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::PathBuf;

/// Unified error type for all core operations.
///
/// Listing and lookup failures are caught at the view boundary and degrade
/// to an empty listing or an omitted entry; they are never meant to take
/// the frontend down.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist (e.g. a tab folder that was renamed).
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to read the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to a file.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A filesystem entry has no loadable asset behind it.
    #[error("no asset at: {0}")]
    AssetResolution(PathBuf),

    /// Failed to parse a TOML configuration or preference file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Maps an I/O error on `path` to the most specific variant.
    pub fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(err),
        }
    }
}

/// Convenience alias used throughout `foldertabs-core`.
pub type CoreResult<T> = Result<T, CoreError>;
