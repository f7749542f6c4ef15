//! Text rendering of core events for the line shell.
//!
//! Every function returns the lines to print, so the output can be tested
//! without capturing stdout.

use std::path::Path;

use fbrowse_core::{CommandDescriptor, CommandRegistry, DirectoryEntry, Event, PasteMode};

const PARENT_LINE: &str = "  ../";

/// Renders a directory listing: a header, `..`, then one line per entry.
/// Directories get a trailing `/`, files their kind and modification time.
///
/// `..` is shown even at a root, where going up is a no-op.
pub fn listing(path: &Path, entries: &[DirectoryEntry], date_format: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push(format!("{}:", path.display()));
    lines.push(PARENT_LINE.to_string());
    lines.extend(entry_lines(entries, date_format));
    lines
}

fn entry_lines(entries: &[DirectoryEntry], date_format: &str) -> Vec<String> {
    let labels: Vec<String> = entries
        .iter()
        .map(|e| {
            if e.is_dir() {
                format!("{}/", e.name())
            } else {
                e.name().to_string()
            }
        })
        .collect();
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    entries
        .iter()
        .zip(labels)
        .map(|(entry, label)| {
            if entry.is_dir() {
                return format!("  {label}");
            }
            let kind = entry.kind().label();
            match entry.modified_with_format(date_format) {
                Some(date) => format!("  {label:<width$}  {kind:<5}  {date}"),
                None => format!("  {label:<width$}  {kind}"),
            }
        })
        .collect()
}

/// Renders any event the session can produce.
pub fn event(event: &Event, date_format: &str) -> Vec<String> {
    match event {
        Event::DirectoryLoaded { path, entries } => listing(path, entries, date_format),
        Event::SearchResults { term, entries } => {
            let mut lines = vec![format!(
                "search {term:?}: {} match{}",
                entries.len(),
                if entries.len() == 1 { "" } else { "es" }
            )];
            lines.push(PARENT_LINE.to_string());
            lines.extend(entry_lines(entries, date_format));
            lines
        }
        Event::ClipboardChanged { mode, count } => vec![match mode {
            Some(PasteMode::Copy) => format!("{count} item(s) staged to copy"),
            Some(PasteMode::Cut) => format!("{count} item(s) staged to move"),
            None => "clipboard cleared".to_string(),
        }],
        Event::PasteFinished(report) => vec![report.summary()],
        Event::OperationComplete { operation } => vec![operation.clone()],
        Event::OperationFailed { operation, error } => vec![format!("error: {operation}: {error}")],
        Event::Opened(path) => vec![format!("opened {}", path.display())],
        Event::Unchanged => vec!["nothing to do".to_string()],
    }
}

/// One line per descriptor: usage, category and description.
pub fn commands<'a>(descriptors: impl IntoIterator<Item = &'a CommandDescriptor>) -> Vec<String> {
    descriptors
        .into_iter()
        .map(|d| {
            format!(
                "  {:<34} {:<10} {}",
                d.usage_line(),
                d.category.label(),
                d.description
            )
        })
        .collect()
}

/// Help text: shell built-ins followed by every registered command.
pub fn help(registry: &CommandRegistry) -> Vec<String> {
    let mut lines = vec![
        "built-ins:".to_string(),
        "  help                               list commands".to_string(),
        "  palette <query>                    fuzzy-search commands".to_string(),
        "  quit | exit                        leave fbrowse".to_string(),
        "commands:".to_string(),
    ];
    lines.extend(commands(registry.all()));
    lines
}
