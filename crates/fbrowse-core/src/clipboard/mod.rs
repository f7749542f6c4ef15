//! Single-slot copy / cut / paste clipboard.
//!
//! Staging only records paths; the filesystem is touched when the clipboard
//! is applied to a target directory. A paste processes every staged path
//! even when some fail, and reports the outcome of each one. Nothing is
//! rolled back.
//!
//! After a paste a pending copy stays staged (pasting again copies the same
//! sources again), while a pending cut keeps only the items that could not
//! be moved.

pub mod worker;

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::error::CoreResult;
use crate::fs::ops::{copy_into, move_into, CancelToken};
use crate::fs::path::require_directory;

/// A non-empty, duplicate-free, ordered set of paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection(Vec<PathBuf>);

impl Selection {
    /// Builds a selection, dropping duplicates. Returns `None` when no path
    /// is given.
    pub fn new(paths: impl IntoIterator<Item = PathBuf>) -> Option<Self> {
        let mut unique: Vec<PathBuf> = Vec::new();
        for path in paths {
            if !unique.contains(&path) {
                unique.push(path);
            }
        }
        if unique.is_empty() {
            None
        } else {
            Some(Self(unique))
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true: a selection is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What a paste does with its sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteMode {
    Copy,
    Cut,
}

impl PasteMode {
    pub fn verb(self) -> &'static str {
        match self {
            Self::Copy => "copied",
            Self::Cut => "moved",
        }
    }
}

/// The clipboard state. Paths are present exactly when an action is pending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Clipboard {
    #[default]
    Empty,
    PendingCopy(Selection),
    PendingCut(Selection),
}

impl Clipboard {
    pub fn new() -> Self {
        Self::Empty
    }

    /// Stages a copy of `paths`, replacing anything pending. An empty set
    /// clears the clipboard.
    pub fn stage_copy(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        *self = Selection::new(paths).map_or(Self::Empty, Self::PendingCopy);
    }

    /// Stages a move of `paths`, replacing anything pending. An empty set
    /// clears the clipboard.
    pub fn stage_cut(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        *self = Selection::new(paths).map_or(Self::Empty, Self::PendingCut);
    }

    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn mode(&self) -> Option<PasteMode> {
        match self {
            Self::Empty => None,
            Self::PendingCopy(_) => Some(PasteMode::Copy),
            Self::PendingCut(_) => Some(PasteMode::Cut),
        }
    }

    /// Staged paths; empty when nothing is pending.
    pub fn paths(&self) -> &[PathBuf] {
        match self {
            Self::Empty => &[],
            Self::PendingCopy(sel) | Self::PendingCut(sel) => sel.paths(),
        }
    }

    /// Snapshot of the pending action, for running a paste elsewhere
    /// (see [`worker::spawn_paste`]).
    pub fn job(&self) -> Option<PasteJob> {
        let mode = self.mode()?;
        Some(PasteJob {
            mode,
            sources: self.paths().to_vec(),
        })
    }

    /// Pastes into `target` on the calling thread.
    ///
    /// Returns an empty report when nothing is staged.
    ///
    /// # Errors
    ///
    /// Only whole-paste failures are errors:
    /// [`PathNotFound`](crate::CoreError::PathNotFound) or
    /// [`NotADirectory`](crate::CoreError::NotADirectory) when `target` is
    /// not a directory. In that case the clipboard is left as it was.
    /// Per-item failures are in the report.
    pub fn apply_to(&mut self, target: &Path) -> CoreResult<PasteReport> {
        self.apply_to_with(target, &CancelToken::new(), |_| {})
    }

    /// Like [`Clipboard::apply_to`], checking `cancel` between items and
    /// calling `on_progress` before each one.
    pub fn apply_to_with(
        &mut self,
        target: &Path,
        cancel: &CancelToken,
        on_progress: impl FnMut(PasteProgress),
    ) -> CoreResult<PasteReport> {
        let Some(job) = self.job() else {
            return Ok(PasteReport::empty(target));
        };
        let report = job.run(target, cancel, on_progress)?;
        self.settle(&report);
        Ok(report)
    }

    /// Applies the post-paste policy for a finished `report`.
    ///
    /// Only takes effect if the clipboard still holds the cut that produced
    /// the report; a restaged clipboard is left alone.
    pub fn settle(&mut self, report: &PasteReport) {
        let Self::PendingCut(sel) = self else {
            return;
        };
        if report.mode != Some(PasteMode::Cut) || sel.paths() != report.sources().as_slice() {
            return;
        }
        // Sources that vanished cannot be retried, so only keep those still on disk.
        let remaining = report
            .failed()
            .map(|o| o.source.clone())
            .filter(|p| crate::fs::path::exists(p));
        self.stage_cut(remaining);
    }
}

/// A detached copy of a pending clipboard action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteJob {
    mode: PasteMode,
    sources: Vec<PathBuf>,
}

impl PasteJob {
    pub fn mode(&self) -> PasteMode {
        self.mode
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Runs the paste. See [`Clipboard::apply_to_with`].
    pub fn run(
        &self,
        target: &Path,
        cancel: &CancelToken,
        mut on_progress: impl FnMut(PasteProgress),
    ) -> CoreResult<PasteReport> {
        require_directory(target)?;

        let total = self.sources.len();
        let mut outcomes = Vec::with_capacity(total);
        for (index, source) in self.sources.iter().enumerate() {
            on_progress(PasteProgress {
                index,
                total,
                source: source.clone(),
            });
            let result = match self.mode {
                PasteMode::Copy => copy_into(source, target, cancel),
                PasteMode::Cut => move_into(source, target, cancel),
            };
            if let Err(e) = &result {
                tracing::warn!("paste of {} failed: {e}", source.display());
            }
            outcomes.push(PasteOutcome {
                source: source.clone(),
                result,
            });
        }

        let report = PasteReport {
            mode: Some(self.mode),
            target: target.to_path_buf(),
            outcomes,
        };
        tracing::info!("{}", report.summary());
        Ok(report)
    }
}

/// Emitted before each item of a paste is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteProgress {
    /// Zero-based position of `source` in the batch.
    pub index: usize,
    pub total: usize,
    pub source: PathBuf,
}

/// Result of pasting one source path.
#[derive(Debug)]
pub struct PasteOutcome {
    pub source: PathBuf,
    /// The created path, or why this item failed.
    pub result: CoreResult<PathBuf>,
}

/// Per-item results of a paste.
#[derive(Debug)]
pub struct PasteReport {
    /// `None` when the clipboard was empty and nothing ran.
    pub mode: Option<PasteMode>,
    pub target: PathBuf,
    pub outcomes: Vec<PasteOutcome>,
}

impl PasteReport {
    fn empty(target: &Path) -> Self {
        Self {
            mode: None,
            target: target.to_path_buf(),
            outcomes: Vec::new(),
        }
    }

    pub fn sources(&self) -> Vec<PathBuf> {
        self.outcomes.iter().map(|o| o.source.clone()).collect()
    }

    /// Paths created by successful items.
    pub fn succeeded(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(PathBuf::as_path))
    }

    pub fn failed(&self) -> impl Iterator<Item = &PasteOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// One-line, human-readable summary naming every failed item.
    pub fn summary(&self) -> String {
        let Some(mode) = self.mode else {
            return "clipboard is empty".to_string();
        };
        let total = self.outcomes.len();
        let ok = self.succeeded().count();
        let mut msg = format!(
            "{} {ok} of {total} item{} into {}",
            mode.verb(),
            if total == 1 { "" } else { "s" },
            self.target.display()
        );
        for (i, outcome) in self.failed().enumerate() {
            let sep = if i == 0 { "; failed: " } else { ", " };
            if let Err(e) = &outcome.result {
                let _ = write!(msg, "{sep}{} ({e})", outcome.source.display());
            }
        }
        msg
    }

    /// Collapses a failed report into an error for callers that want
    /// first-failure semantics.
    pub fn into_result(self) -> CoreResult<Vec<PathBuf>> {
        let mut created = Vec::with_capacity(self.outcomes.len());
        for outcome in self.outcomes {
            created.push(outcome.result?);
        }
        Ok(created)
    }
}
