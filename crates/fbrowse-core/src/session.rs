//! A browsing session: the state a frontend drives through [`Command`]s.
//!
//! [`Session`] owns the navigation state, the clipboard, the active search
//! and the view settings. [`Session::dispatch`] is the single entry point a
//! UI needs; it never panics and turns every failure into
//! [`Event::OperationFailed`].

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::clipboard::{Clipboard, PasteJob, PasteMode, PasteReport};
use crate::config::settings::Config;
use crate::error::{CoreError, CoreResult};
use crate::event::{Command, Event};
use crate::fs::entry::DirectoryEntry;
use crate::fs::{open, ops, path};
use crate::nav::filter::{filter_by_name, filter_hidden, sort_entries, SortDirection, SortField};
use crate::nav::state::NavigationState;

/// Single-threaded browsing session.
#[derive(Debug)]
pub struct Session {
    nav: NavigationState,
    clipboard: Clipboard,
    config: Config,
    show_hidden: bool,
    search: Option<String>,
}

impl Session {
    /// Opens a session at `start`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::PathNotFound`] / [`CoreError::NotADirectory`] if
    ///   `start` is not an existing directory.
    pub fn new(config: Config, start: PathBuf) -> CoreResult<Self> {
        let nav = NavigationState::new(start)?;
        Ok(Self {
            nav,
            clipboard: Clipboard::new(),
            show_hidden: config.general.show_hidden,
            config,
            search: None,
        })
    }

    pub fn current_dir(&self) -> &Path {
        self.nav.current_dir()
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    /// The active search term, if a search is narrowing the listing.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Reads the current directory, applying the hidden-file and sort settings.
    ///
    /// The active search is not applied.
    pub fn listing(&self) -> CoreResult<Vec<DirectoryEntry>> {
        let entries = ops::list_directory(self.nav.current_dir())?;
        let visible = filter_hidden(&entries, self.show_hidden);
        if self.config.general.sort_dir_first {
            Ok(sort_entries(&visible, SortField::Name, SortDirection::Ascending, true))
        } else {
            Ok(visible)
        }
    }

    /// Executes `command` and reports the result.
    pub fn dispatch(&mut self, command: Command) -> Event {
        let operation = command.label();
        tracing::debug!("dispatch {command:?}");
        match self.execute(command) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("{operation} failed: {e}");
                Event::OperationFailed {
                    operation: operation.to_string(),
                    error: e.to_string(),
                }
            }
        }
    }

    fn execute(&mut self, command: Command) -> CoreResult<Event> {
        match command {
            Command::Navigate(target) => {
                let target = self.resolve(&target)?;
                self.nav.navigate_to(target)?;
                self.entered()
            }
            Command::GoUp => self.moved(|nav| nav.go_up()),
            Command::GoBack => self.moved(|nav| nav.go_back()),
            Command::GoForward => self.moved(|nav| nav.go_forward()),
            Command::Refresh => self.view(),
            Command::Search(term) => {
                // Blank clears; anything else is kept verbatim.
                self.search = (!term.trim().is_empty()).then_some(term);
                self.view()
            }
            Command::ClearSearch => {
                self.search = None;
                self.view()
            }
            Command::ToggleHidden => {
                self.show_hidden = !self.show_hidden;
                self.view()
            }
            Command::StageCopy(paths) => {
                let paths = self.resolve_existing(&paths)?;
                self.clipboard.stage_copy(paths);
                Ok(self.clipboard_changed())
            }
            Command::StageCut(paths) => {
                let paths = self.resolve_existing(&paths)?;
                self.clipboard.stage_cut(paths);
                Ok(self.clipboard_changed())
            }
            Command::ClearClipboard => {
                self.clipboard.clear();
                Ok(self.clipboard_changed())
            }
            Command::Paste => self.paste(),
            Command::CreateFile(name) => {
                let created = ops::create_file(self.nav.current_dir(), &name)?;
                Ok(complete(format!("created file {}", created.display())))
            }
            Command::CreateDirectory(name) => {
                let created = ops::create_directory(self.nav.current_dir(), &name)?;
                Ok(complete(format!("created directory {}", created.display())))
            }
            Command::Rename(target, new_name) => {
                let target = self.resolve(&target)?;
                let renamed = ops::rename(&target, &new_name)?;
                Ok(complete(format!(
                    "renamed {} to {}",
                    target.display(),
                    renamed.display()
                )))
            }
            Command::Delete(paths) => self.delete_all(&paths, ops::delete),
            Command::DeleteRecursive(paths) => self.delete_all(&paths, ops::delete_recursive),
            Command::Open(target) => {
                let target = self.resolve(&target)?;
                if path::is_directory(&target) {
                    self.nav.navigate_to(target)?;
                    return self.entered();
                }
                open::open_with_default(&target)?;
                Ok(Event::Opened(target))
            }
        }
    }

    /// Snapshot of the staged paste, for running it on a background task.
    pub fn paste_job(&self) -> Option<PasteJob> {
        self.clipboard.job()
    }

    /// Applies the clipboard policy for a paste that ran elsewhere and
    /// wraps the report in an event.
    pub fn finish_paste(&mut self, report: PasteReport) -> Event {
        self.clipboard.settle(&report);
        self.release_copy(&report);
        Event::PasteFinished(report)
    }

    fn paste(&mut self) -> CoreResult<Event> {
        if self.clipboard.is_empty() {
            return Ok(Event::Unchanged);
        }
        let target = self.nav.current_dir().to_path_buf();
        let report = self.clipboard.apply_to(&target)?;
        self.release_copy(&report);
        Ok(Event::PasteFinished(report))
    }

    fn release_copy(&mut self, report: &PasteReport) {
        if self.config.clipboard.keep_copy_after_paste || report.mode != Some(PasteMode::Copy) {
            return;
        }
        if self.clipboard.mode() == Some(PasteMode::Copy)
            && self.clipboard.paths() == report.sources().as_slice()
        {
            self.clipboard.clear();
        }
    }

    /// Deletes every path, continuing past failures.
    fn delete_all(
        &self,
        paths: &[PathBuf],
        delete: fn(&Path) -> CoreResult<()>,
    ) -> CoreResult<Event> {
        if let [single] = paths {
            let target = self.resolve(single)?;
            delete(&target)?;
            return Ok(complete(format!("deleted {}", target.display())));
        }

        let mut failures: Vec<(PathBuf, CoreError)> = Vec::new();
        for p in paths {
            if let Err(e) = self.resolve(p).and_then(|target| delete(&target)) {
                failures.push((p.clone(), e));
            }
        }

        let total = paths.len();
        let ok = total - failures.len();
        let mut msg = format!("deleted {ok} of {total} items");
        if failures.is_empty() {
            return Ok(complete(msg));
        }
        for (i, (p, e)) in failures.iter().enumerate() {
            let sep = if i == 0 { "; failed: " } else { ", " };
            let _ = write!(msg, "{sep}{} ({e})", p.display());
        }
        tracing::warn!("{msg}");
        Ok(Event::OperationFailed {
            operation: "delete".to_string(),
            error: msg,
        })
    }

    fn moved(&mut self, step: impl FnOnce(&mut NavigationState) -> bool) -> CoreResult<Event> {
        if step(&mut self.nav) {
            self.entered()
        } else {
            Ok(Event::Unchanged)
        }
    }

    /// A new directory drops the active search.
    fn entered(&mut self) -> CoreResult<Event> {
        self.search = None;
        self.view()
    }

    fn view(&self) -> CoreResult<Event> {
        let entries = self.listing()?;
        Ok(match &self.search {
            Some(term) => Event::SearchResults {
                term: term.clone(),
                entries: filter_by_name(&entries, term),
            },
            None => Event::DirectoryLoaded {
                path: self.nav.current_dir().to_path_buf(),
                entries,
            },
        })
    }

    fn clipboard_changed(&self) -> Event {
        Event::ClipboardChanged {
            mode: self.clipboard.mode(),
            count: self.clipboard.paths().len(),
        }
    }

    fn resolve(&self, input: &Path) -> CoreResult<PathBuf> {
        match input.to_str() {
            Some(s) => path::resolve(s, self.nav.current_dir()),
            None => Ok(path::normalize(&self.nav.current_dir().join(input))),
        }
    }

    fn resolve_existing(&self, inputs: &[PathBuf]) -> CoreResult<Vec<PathBuf>> {
        inputs
            .iter()
            .map(|p| {
                let resolved = self.resolve(p)?;
                if path::exists(&resolved) {
                    Ok(resolved)
                } else {
                    Err(CoreError::PathNotFound(resolved))
                }
            })
            .collect()
    }
}

fn complete(operation: String) -> Event {
    Event::OperationComplete { operation }
}
