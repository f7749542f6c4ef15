//! Event system for communication between UI and Core.
//!
//! The UI translates user input into [`Command`]s, which
//! [`Session::dispatch`](crate::session::Session::dispatch) processes and
//! answers with an [`Event`]. Any frontend can drive the same core logic.

use std::path::PathBuf;

use crate::clipboard::{PasteMode, PasteReport};
use crate::fs::entry::DirectoryEntry;

/// An action the UI requests the core to perform.
///
/// Commands flow **UI → Core**. The core never creates commands itself.
/// Relative paths and names are resolved against the current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Navigate into the directory at the given path.
    Navigate(PathBuf),
    /// Move to the parent directory.
    GoUp,
    /// Navigate backward in history.
    GoBack,
    /// Navigate forward in history.
    GoForward,
    /// Re-read the current directory.
    Refresh,
    /// Filter the current listing by a case-insensitive substring.
    Search(String),
    /// Drop the active search and show the full listing.
    ClearSearch,
    /// Stage the paths for copying.
    StageCopy(Vec<PathBuf>),
    /// Stage the paths for moving.
    StageCut(Vec<PathBuf>),
    /// Forget whatever is staged.
    ClearClipboard,
    /// Paste the staged paths into the current directory.
    Paste,
    /// Create an empty file in the current directory.
    CreateFile(String),
    /// Create a directory (nested `a/b/c` allowed) in the current directory.
    CreateDirectory(String),
    /// Rename a file or directory in place.
    Rename(PathBuf, String),
    /// Delete files and empty directories.
    Delete(Vec<PathBuf>),
    /// Delete, descending into non-empty directories.
    DeleteRecursive(Vec<PathBuf>),
    /// Enter a directory, or open a file with the OS default application.
    Open(PathBuf),
    /// Toggle visibility of hidden (dot-prefixed) files.
    ToggleHidden,
}

impl Command {
    /// Short, human-readable operation name used in result messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Navigate(_) => "navigate",
            Self::GoUp => "go up",
            Self::GoBack => "go back",
            Self::GoForward => "go forward",
            Self::Refresh => "refresh",
            Self::Search(_) => "search",
            Self::ClearSearch => "clear search",
            Self::StageCopy(_) => "copy",
            Self::StageCut(_) => "cut",
            Self::ClearClipboard => "clear clipboard",
            Self::Paste => "paste",
            Self::CreateFile(_) => "create file",
            Self::CreateDirectory(_) => "create directory",
            Self::Rename(..) => "rename",
            Self::Delete(_) => "delete",
            Self::DeleteRecursive(_) => "delete recursively",
            Self::Open(_) => "open",
            Self::ToggleHidden => "toggle hidden",
        }
    }
}

/// A notification the core sends back to the UI.
///
/// Events flow **Core → UI**. The UI uses these to update its display state.
#[derive(Debug)]
pub enum Event {
    /// A directory has been successfully read.
    DirectoryLoaded {
        /// The absolute path of the directory.
        path: PathBuf,
        /// The visible entries, sorted.
        entries: Vec<DirectoryEntry>,
    },
    /// A search narrowed the current listing.
    SearchResults {
        term: String,
        entries: Vec<DirectoryEntry>,
    },
    /// The clipboard was staged or cleared.
    ClipboardChanged {
        /// `None` once the clipboard is empty.
        mode: Option<PasteMode>,
        count: usize,
    },
    /// A paste ran; the report lists every item's outcome.
    PasteFinished(PasteReport),
    /// A file operation completed successfully.
    OperationComplete {
        /// Human-readable description of the operation.
        operation: String,
    },
    /// A file operation failed.
    OperationFailed {
        /// Human-readable description of the operation.
        operation: String,
        /// The error message.
        error: String,
    },
    /// A file was handed to the default application.
    Opened(PathBuf),
    /// The command had nothing to do (e.g. going up at the root).
    Unchanged,
}
