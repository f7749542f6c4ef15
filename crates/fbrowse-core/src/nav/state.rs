//! Current directory plus navigation history.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::path::{is_directory, normalize, parent_of, require_directory};
use crate::nav::history::History;

/// Where the user is and where they have been.
///
/// Navigation methods only change state on success. None of them re-list
/// the directory; the caller does that after a successful move.
#[derive(Debug, Clone)]
pub struct NavigationState {
    current: PathBuf,
    history: History,
}

impl NavigationState {
    /// Starts navigation at `start`.
    ///
    /// A relative `start` is taken against the working directory, so the
    /// stored path is always absolute and normalized.
    ///
    /// # Errors
    ///
    /// - [`CoreError::PathNotFound`] / [`CoreError::NotADirectory`] if
    ///   `start` is not an existing directory.
    pub fn new(start: PathBuf) -> CoreResult<Self> {
        let absolute = std::path::absolute(&start).map_err(|e| CoreError::from_io(&start, e))?;
        let start = normalize(&absolute);
        require_directory(&start)?;
        Ok(Self {
            current: start,
            history: History::new(),
        })
    }

    /// The directory currently being browsed.
    pub fn current_dir(&self) -> &Path {
        &self.current
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Moves to `path`, recording the previous directory in history.
    ///
    /// # Errors
    ///
    /// - [`CoreError::PathNotFound`] if `path` does not exist or is not a
    ///   directory. The state is left untouched.
    pub fn navigate_to(&mut self, path: PathBuf) -> CoreResult<()> {
        if !is_directory(&path) {
            return Err(CoreError::PathNotFound(path));
        }
        self.enter(path);
        Ok(())
    }

    /// Moves to the parent directory. Returns `false` (and changes nothing)
    /// when already at a filesystem root.
    pub fn go_up(&mut self) -> bool {
        match parent_of(&self.current) {
            Some(parent) => {
                self.enter(parent);
                true
            }
            None => false,
        }
    }

    /// Steps back in history. Returns `false` if there is nothing behind,
    /// or if the directory behind no longer exists; history is unchanged then.
    pub fn go_back(&mut self) -> bool {
        match self.history.back(&self.current) {
            Some(target) if is_directory(&target) => {
                tracing::debug!("back to {}", target.display());
                self.current = target;
                true
            }
            Some(stale) => {
                tracing::debug!("history entry {} is gone", stale.display());
                self.history.forward(&stale);
                false
            }
            None => false,
        }
    }

    /// Steps forward in history. Returns `false` if there is nothing ahead,
    /// or if the directory ahead no longer exists.
    pub fn go_forward(&mut self) -> bool {
        match self.history.forward(&self.current) {
            Some(target) if is_directory(&target) => {
                tracing::debug!("forward to {}", target.display());
                self.current = target;
                true
            }
            Some(stale) => {
                tracing::debug!("history entry {} is gone", stale.display());
                self.history.back(&stale);
                false
            }
            None => false,
        }
    }

    fn enter(&mut self, path: PathBuf) {
        tracing::debug!("navigate {} -> {}", self.current.display(), path.display());
        let previous = std::mem::replace(&mut self.current, path);
        self.history.record(previous);
    }
}
