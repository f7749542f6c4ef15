//! Error types for `fbrowse-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`. OS-level failures are
//! classified into one of the [`CoreError`] kinds at the call site via
//! [`CoreError::from_io`], so nothing reaches the UI as a raw `io::Error`.

use std::io;
use std::path::{Path, PathBuf};

/// Unified error type for all core operations.
///
/// Every variant names the offending path or name so the caller can show a
/// single human-readable message without extra context.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// A directory was expected but the path points to something else.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The process lacks permission to access the path.
    #[error("access denied: {}", .0.display())]
    AccessDenied(PathBuf),

    /// The destination already exists.
    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// A directory could not be removed because it still has children.
    #[error("directory not empty: {}", .0.display())]
    NotEmpty(PathBuf),

    /// A file or directory name is invalid (empty, contains path separators, etc.).
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// A directory cannot be pasted into itself or one of its descendants.
    #[error("cannot paste a directory into itself: {}", .0.display())]
    IntoItself(PathBuf),

    /// A background operation was cancelled before this item was processed.
    #[error("operation cancelled")]
    Cancelled,

    /// A command name is not in the command registry.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A command was given the wrong arguments; carries the usage line.
    #[error("usage: {0}")]
    Usage(String),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// Any other OS error, with the underlying message.
    #[error("{}: {message}", path.display())]
    Os { path: PathBuf, message: String },
}

impl CoreError {
    /// Classifies an I/O error raised while operating on `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound(path),
            io::ErrorKind::PermissionDenied => Self::AccessDenied(path),
            io::ErrorKind::AlreadyExists => Self::AlreadyExists(path),
            io::ErrorKind::DirectoryNotEmpty => Self::NotEmpty(path),
            io::ErrorKind::NotADirectory => Self::NotADirectory(path),
            _ => Self::Os {
                path,
                message: err.to_string(),
            },
        }
    }

    /// Returns the path this error refers to, when it carries one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::PathNotFound(p)
            | Self::NotADirectory(p)
            | Self::AccessDenied(p)
            | Self::AlreadyExists(p)
            | Self::NotEmpty(p)
            | Self::IntoItself(p)
            | Self::Os { path: p, .. } => Some(p),
            Self::InvalidName(_)
            | Self::UnknownCommand(_)
            | Self::Usage(_)
            | Self::Cancelled
            | Self::ConfigParse(_) => None,
        }
    }
}

/// Convenience alias used throughout `fbrowse-core`.
pub type CoreResult<T> = Result<T, CoreError>;
