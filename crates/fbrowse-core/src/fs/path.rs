//! Path resolution and validation.
//!
//! Turns user-typed path strings into normalized absolute paths and answers
//! the existence questions the navigation layer needs.

use std::path::{Component, Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Resolves a user-supplied path string against `base`.
///
/// Leading/trailing whitespace is trimmed, a leading `~` expands to `$HOME`,
/// relative input is joined onto `base`, and `.` / `..` components are
/// removed lexically. The result is not checked for existence.
///
/// # Errors
///
/// - [`CoreError::InvalidName`] if the input is empty or contains a NUL byte.
pub fn resolve(input: &str, base: &Path) -> CoreResult<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.contains('\0') {
        return Err(CoreError::InvalidName(input.to_string()));
    }

    let expanded = expand_home(trimmed);
    let joined = if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    };
    Ok(normalize(&joined))
}

fn expand_home(input: &str) -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    match (input, home) {
        ("~", Some(home)) => home,
        (s, Some(home)) if s.starts_with("~/") => home.join(&s[2..]),
        (s, _) => PathBuf::from(s),
    }
}

/// Lexically normalizes a path: drops `.` and folds `..` into its parent.
///
/// `..` at the root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Returns `true` if anything (file, directory, or dangling symlink) exists at `path`.
pub fn exists(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

/// Returns `true` if `path` is an existing directory (following symlinks).
pub fn is_directory(path: &Path) -> bool {
    path.is_dir()
}

/// Returns the parent directory, or `None` for a filesystem root.
pub fn parent_of(path: &Path) -> Option<PathBuf> {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

/// Checks that `path` is an existing directory.
///
/// # Errors
///
/// - [`CoreError::PathNotFound`]: nothing exists at `path`.
/// - [`CoreError::NotADirectory`]: `path` exists but is not a directory.
pub fn require_directory(path: &Path) -> CoreResult<()> {
    if !path.exists() {
        return Err(CoreError::PathNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Validates a single file or directory name (no separators, not `.`/`..`).
pub fn validate_name(name: &str) -> CoreResult<()> {
    if is_valid_filename(name) {
        Ok(())
    } else {
        Err(CoreError::InvalidName(name.to_string()))
    }
}

fn is_valid_filename(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    if name.contains('/') || name.contains('\0') {
        return false;
    }
    #[cfg(windows)]
    if name.contains('\\') || name.contains(':') {
        return false;
    }
    true
}
