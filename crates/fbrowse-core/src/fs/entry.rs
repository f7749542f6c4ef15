//! Directory entry representation.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use unicode_normalization::UnicodeNormalization;

/// Display format for file modification times.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Broad category of an entry, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Directory,
    Image,
    Web,
    Audio,
    Video,
    /// Anything without a recognised extension.
    Other,
}

impl FileKind {
    /// Short tag shown next to file names.
    pub fn label(self) -> &'static str {
        match self {
            Self::Directory => "dir",
            Self::Image => "image",
            Self::Web => "web",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Other => "file",
        }
    }
}

/// Classifies a file name by its extension, ignoring case.
pub fn kind_of(name: &str) -> FileKind {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" | "png" | "gif" => FileKind::Image,
        "html" | "webp" | "webm" => FileKind::Web,
        "mp3" | "wav" | "ape" => FileKind::Audio,
        "mp4" | "avi" | "mov" => FileKind::Video,
        _ => FileKind::Other,
    }
}

/// A single file or directory as listed from its parent.
///
/// `DirectoryEntry` is immutable and is produced fresh on every listing.
/// Directories carry no modification time; files carry their last-modified
/// time when the platform reports one.
///
/// # Examples
///
/// ```no_run
/// use fbrowse_core::DirectoryEntry;
/// use std::fs;
///
/// let metadata = fs::metadata("Cargo.toml").unwrap();
/// let entry = DirectoryEntry::new("Cargo.toml".into(), &metadata);
/// assert_eq!(entry.name(), "Cargo.toml");
/// assert!(!entry.is_dir());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    path: PathBuf,
    name: String,
    is_dir: bool,
    modified: Option<SystemTime>,
}

impl DirectoryEntry {
    /// Creates an entry from a path and its metadata.
    ///
    /// The name is NFC-normalized so decomposed file names (as stored by
    /// macOS) compare and search like their composed form.
    pub fn new(path: PathBuf, metadata: &std::fs::Metadata) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default();
        let is_dir = metadata.is_dir();

        Self {
            path,
            name,
            is_dir,
            modified: if is_dir {
                None
            } else {
                metadata.modified().ok()
            },
        }
    }

    /// Returns the full path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file or directory name (last component of the path).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Directories are always [`FileKind::Directory`]; files go by extension.
    pub fn kind(&self) -> FileKind {
        if self.is_dir {
            FileKind::Directory
        } else {
            kind_of(&self.name)
        }
    }

    /// Returns `true` if the name starts with `.`.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Last-modified time. Always `None` for directories.
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Modification time as `YYYY-MM-DD HH:MM:SS` in local time.
    pub fn modified_display(&self) -> Option<String> {
        self.modified_with_format(DEFAULT_DATE_FORMAT)
    }

    /// Modification time rendered with a `strftime`-style format.
    pub fn modified_with_format(&self, format: &str) -> Option<String> {
        self.modified
            .map(|t| DateTime::<Local>::from(t).format(format).to_string())
    }
}
