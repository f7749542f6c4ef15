//! fbrowse core library: UI-agnostic file browser logic.
//!
//! `fbrowse-core` provides the types and operations behind a file browser:
//! listing, navigation with history, a copy/cut clipboard, name search,
//! file mutations and opening files with the default application. It does
//! not depend on any UI framework; the `fbrowse` shell drives it through
//! the same [`Command`] / [`Event`] interface a GUI would use.
//!
//! # Modules
//!
//! - [`fs`]: Path resolution, [`DirectoryEntry`], listing, mutations, the default-app launcher.
//! - [`nav`]: Navigation state with back/forward history, name filtering and sorting.
//! - [`clipboard`]: Copy/cut staging, paste reports and the background paste worker.
//! - [`command`]: Command table: ids, metadata, text parsing and fuzzy search.
//! - [`session`]: [`Session`], which turns [`Command`]s into [`Event`]s.
//! - [`config`]: TOML settings.
//! - [`event`]: Command and event types for UI ↔ Core communication.
//! - [`error`]: Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod clipboard;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod fs;
pub mod nav;
pub mod session;

pub use clipboard::worker::{spawn_paste, PasteHandle, PasteMessage};
pub use clipboard::{Clipboard, PasteJob, PasteMode, PasteReport};
pub use command::{CommandCategory, CommandDescriptor, CommandRegistry};
pub use config::settings::Config;
pub use error::{CoreError, CoreResult};
pub use event::{Command, Event};
pub use fs::entry::{kind_of, DirectoryEntry, FileKind};
pub use fs::ops::{
    create_directory, create_file, delete, delete_recursive, list_directory, rename, CancelToken,
};
pub use fs::open::open_with_default;
pub use nav::filter::{filter_by_name, filter_hidden, sort_entries, SortDirection, SortField};
pub use nav::history::History;
pub use nav::state::NavigationState;
pub use session::Session;

/// Normalises a string to NFC (composed) form.
///
/// macOS stores filenames in NFD (decomposed), which makes accented and
/// Hangul names compare unequal to what the user typed. This helper
/// re-composes them.
pub fn nfc_string(s: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    s.nfc().collect()
}
