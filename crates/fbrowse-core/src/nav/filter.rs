//! Searching, sorting and hiding entries of a single listing.
//!
//! Every function takes a slice and returns a new `Vec`; the input listing
//! is never mutated, and nothing here touches the filesystem.

use std::cmp::Ordering;

use crate::fs::entry::DirectoryEntry;
use crate::nfc_string;

/// The field by which entries are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Alphabetical by name (case-insensitive).
    Name,
    /// By last-modified time. Directories (no timestamp) sort first.
    Date,
}

/// Sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Keeps the entries whose name contains `term`, ignoring case.
///
/// Relative order is preserved. A blank `term` matches everything, so the
/// listing comes back unchanged. Any other term is matched as given,
/// surrounding spaces included. Only the given entries are searched; this
/// never descends into subdirectories.
pub fn filter_by_name(entries: &[DirectoryEntry], term: &str) -> Vec<DirectoryEntry> {
    if term.trim().is_empty() {
        return entries.to_vec();
    }
    let needle = nfc_string(term).to_lowercase();

    entries
        .iter()
        .filter(|e| e.name().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Sorts entries by `field` and `direction`.
///
/// With `dirs_first`, directories precede files regardless of direction.
pub fn sort_entries(
    entries: &[DirectoryEntry],
    field: SortField,
    direction: SortDirection,
    dirs_first: bool,
) -> Vec<DirectoryEntry> {
    let mut sorted = entries.to_vec();

    sorted.sort_by(|a, b| {
        if dirs_first {
            let dir_cmp = b.is_dir().cmp(&a.is_dir());
            if dir_cmp != Ordering::Equal {
                return dir_cmp;
            }
        }

        let ord = match field {
            SortField::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
            SortField::Date => a.modified().cmp(&b.modified()),
        };

        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    sorted
}

/// Drops dot-prefixed entries unless `show_hidden` is set.
pub fn filter_hidden(entries: &[DirectoryEntry], show_hidden: bool) -> Vec<DirectoryEntry> {
    if show_hidden {
        return entries.to_vec();
    }
    entries.iter().filter(|e| !e.is_hidden()).cloned().collect()
}
