//! Navigation history with back/forward stacks.

use std::path::{Path, PathBuf};

/// Browser-style navigation history.
///
/// `History` never stores the current directory itself: it stores the
/// directories behind it (`back`) and the ones ahead of it (`forward`).
/// Stepping back or forward exchanges the current directory with the top of
/// the relevant stack. Recording a new visit clears the forward stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    back: Vec<PathBuf>,
    forward: Vec<PathBuf>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that the user left `previous` for a new directory.
    pub fn record(&mut self, previous: PathBuf) {
        self.back.push(previous);
        self.forward.clear();
    }

    /// Steps back from `current`. Returns the directory to show, or `None`
    /// if there is nothing behind.
    pub fn back(&mut self, current: &Path) -> Option<PathBuf> {
        let target = self.back.pop()?;
        self.forward.push(current.to_path_buf());
        Some(target)
    }

    /// Steps forward from `current`. Returns the directory to show, or
    /// `None` if there is nothing ahead.
    pub fn forward(&mut self, current: &Path) -> Option<PathBuf> {
        let target = self.forward.pop()?;
        self.back.push(current.to_path_buf());
        Some(target)
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Directories behind the current one, oldest first.
    pub fn back_entries(&self) -> &[PathBuf] {
        &self.back
    }

    /// Directories ahead of the current one, farthest first.
    pub fn forward_entries(&self) -> &[PathBuf] {
        &self.forward
    }
}
