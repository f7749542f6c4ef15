//! Directory listing and file mutation operations.
//!
//! Every function here converts OS failures into a [`CoreError`] naming the
//! path that failed; nothing panics on a filesystem error.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::DirectoryEntry;
use crate::fs::path::{require_directory, validate_name};

/// Attaches the offending path to an I/O result.
trait IoContext<T> {
    fn at(self, path: &Path) -> CoreResult<T>;
}

impl<T> IoContext<T> for io::Result<T> {
    fn at(self, path: &Path) -> CoreResult<T> {
        self.map_err(|e| CoreError::from_io(path, e))
    }
}

/// Cooperative cancellation flag shared between the control thread and a
/// worker running a long copy or move.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Work already in progress on a single file finishes.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn check(&self) -> CoreResult<()> {
        if self.is_cancelled() {
            Err(CoreError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Reads the immediate children of a directory.
///
/// Entries are sorted by name (case-insensitive, ties broken by the exact
/// name) so repeated listings of an unchanged directory are identical.
/// Children whose metadata cannot be read are skipped.
///
/// # Errors
///
/// - [`CoreError::PathNotFound`]: the path does not exist.
/// - [`CoreError::NotADirectory`]: the path is not a directory.
/// - [`CoreError::AccessDenied`]: read access is denied.
/// - [`CoreError::Os`]: any other I/O error.
///
/// # Examples
///
/// ```no_run
/// use fbrowse_core::list_directory;
/// use std::path::Path;
///
/// for entry in list_directory(Path::new("/home/user")).unwrap() {
///     println!("{}", entry.name());
/// }
/// ```
pub fn list_directory(path: &Path) -> CoreResult<Vec<DirectoryEntry>> {
    require_directory(path)?;

    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(path).at(path)? {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("skipping unreadable entry in {}: {e}", path.display());
                continue;
            }
        };
        let entry_path = dir_entry.path();
        // Follow symlinks so a link to a directory lists as a directory;
        // fall back to the link itself when the target is dangling.
        let metadata = match fs::metadata(&entry_path).or_else(|_| dir_entry.metadata()) {
            Ok(m) => m,
            Err(e) => {
                tracing::debug!("skipping {}: {e}", entry_path.display());
                continue;
            }
        };
        entries.push(DirectoryEntry::new(entry_path, &metadata));
    }

    entries.sort_by(|a, b| {
        a.name()
            .to_lowercase()
            .cmp(&b.name().to_lowercase())
            .then_with(|| a.name().cmp(b.name()))
    });
    tracing::debug!("listed {} ({} entries)", path.display(), entries.len());
    Ok(entries)
}

/// Creates an empty file named `name` inside `dir`.
///
/// # Errors
///
/// - [`CoreError::InvalidName`] if `name` is not a single valid component.
/// - [`CoreError::AlreadyExists`] if something with that name exists.
pub fn create_file(dir: &Path, name: &str) -> CoreResult<PathBuf> {
    validate_name(name)?;
    require_directory(dir)?;
    let path = dir.join(name);

    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .at(&path)?;

    tracing::info!("created file {}", path.display());
    Ok(path)
}

/// Creates a directory inside `dir`, including any missing intermediate
/// directories when `name` has several `/`-separated components.
///
/// # Errors
///
/// - [`CoreError::InvalidName`] if `name` or any component of it is invalid.
/// - [`CoreError::AlreadyExists`] if the final directory already exists.
pub fn create_directory(dir: &Path, name: &str) -> CoreResult<PathBuf> {
    let components: Vec<&str> = name.split('/').filter(|c| !c.is_empty()).collect();
    if components.is_empty() {
        return Err(CoreError::InvalidName(name.to_string()));
    }
    for component in &components {
        validate_name(component).map_err(|_| CoreError::InvalidName(name.to_string()))?;
    }
    require_directory(dir)?;

    let path = components.iter().fold(dir.to_path_buf(), |p, c| p.join(c));
    if fs::symlink_metadata(&path).is_ok() {
        return Err(CoreError::AlreadyExists(path));
    }
    fs::create_dir_all(&path).at(&path)?;

    tracing::info!("created directory {}", path.display());
    Ok(path)
}

/// Deletes a file, a symlink, or an **empty** directory.
///
/// Non-empty directories are refused; use [`delete_recursive`] for those.
///
/// # Errors
///
/// - [`CoreError::PathNotFound`] if `path` does not exist.
/// - [`CoreError::NotEmpty`] if `path` is a directory with children.
pub fn delete(path: &Path) -> CoreResult<()> {
    let meta = fs::symlink_metadata(path).at(path)?;

    if meta.is_dir() {
        fs::remove_dir(path).map_err(|e| {
            // Some platforms report a non-empty directory with a generic kind.
            if e.kind() != io::ErrorKind::DirectoryNotEmpty && has_children(path) {
                CoreError::NotEmpty(path.to_path_buf())
            } else {
                CoreError::from_io(path, e)
            }
        })?;
    } else {
        fs::remove_file(path).at(path)?;
    }

    tracing::info!("deleted {}", path.display());
    Ok(())
}

fn has_children(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|mut rd| rd.next().is_some())
        .unwrap_or(false)
}

/// Deletes a file or an entire directory tree.
///
/// Symlinks are removed, never followed.
///
/// # Errors
///
/// - [`CoreError::PathNotFound`] if `path` does not exist.
pub fn delete_recursive(path: &Path) -> CoreResult<()> {
    let meta = fs::symlink_metadata(path).at(path)?;

    if meta.is_dir() {
        fs::remove_dir_all(path).at(path)?;
    } else {
        fs::remove_file(path).at(path)?;
    }

    tracing::info!("deleted tree {}", path.display());
    Ok(())
}

/// Renames a file or directory within its parent directory.
///
/// Returns the new path.
///
/// # Errors
///
/// - [`CoreError::PathNotFound`] if `path` does not exist.
/// - [`CoreError::InvalidName`] if `new_name` is invalid.
/// - [`CoreError::AlreadyExists`] if `new_name` is taken in the same directory.
pub fn rename(path: &Path, new_name: &str) -> CoreResult<PathBuf> {
    fs::symlink_metadata(path).at(path)?;
    validate_name(new_name)?;

    let parent = path
        .parent()
        .ok_or_else(|| CoreError::InvalidName(path.display().to_string()))?;
    let new_path = parent.join(new_name);
    if new_path == path {
        return Ok(new_path);
    }
    if fs::symlink_metadata(&new_path).is_ok() && !same_entry(path, &new_path) {
        return Err(CoreError::AlreadyExists(new_path));
    }

    fs::rename(path, &new_path).at(path)?;
    tracing::info!("renamed {} -> {}", path.display(), new_path.display());
    Ok(new_path)
}

/// `true` when both paths name the same inode (case-only rename on a
/// case-insensitive filesystem).
fn same_entry(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Computes where `src` lands when pasted into `target_dir`, rejecting
/// collisions and pastes of a directory into its own subtree.
fn paste_destination(src: &Path, target_dir: &Path) -> CoreResult<(PathBuf, fs::Metadata)> {
    let meta = fs::symlink_metadata(src).at(src)?;
    let name = src
        .file_name()
        .ok_or_else(|| CoreError::InvalidName(src.display().to_string()))?;
    let dest = target_dir.join(name);

    if meta.is_dir() {
        let src_canon = fs::canonicalize(src).at(src)?;
        let target_canon = fs::canonicalize(target_dir).at(target_dir)?;
        if target_canon.starts_with(&src_canon) {
            return Err(CoreError::IntoItself(src.to_path_buf()));
        }
    }
    if fs::symlink_metadata(&dest).is_ok() {
        return Err(CoreError::AlreadyExists(dest));
    }
    Ok((dest, meta))
}

/// Copies `src` (file, symlink, or directory tree) into `target_dir` under
/// the same base name. Returns the created path.
///
/// `cancel` is checked between files of a recursive copy; a cancelled copy
/// leaves whatever was already copied in place.
///
/// # Errors
///
/// - [`CoreError::PathNotFound`] if `src` does not exist.
/// - [`CoreError::AlreadyExists`] if `target_dir` already has that name.
/// - [`CoreError::IntoItself`] if `target_dir` is inside `src`.
/// - [`CoreError::Cancelled`] if `cancel` fired mid-copy.
pub fn copy_into(src: &Path, target_dir: &Path, cancel: &CancelToken) -> CoreResult<PathBuf> {
    cancel.check()?;
    let (dest, meta) = paste_destination(src, target_dir)?;
    copy_entry(src, &dest, &meta, cancel, 0)?;
    tracing::info!("copied {} -> {}", src.display(), dest.display());
    Ok(dest)
}

/// Moves `src` into `target_dir` under the same base name. Returns the new path.
///
/// Tries a plain `rename` first; when that fails (for instance across
/// filesystems) falls back to copy + delete.
///
/// # Errors
///
/// Same as [`copy_into`].
pub fn move_into(src: &Path, target_dir: &Path, cancel: &CancelToken) -> CoreResult<PathBuf> {
    cancel.check()?;
    let (dest, meta) = paste_destination(src, target_dir)?;

    match fs::rename(src, &dest) {
        Ok(()) => {}
        Err(e) if matches!(e.kind(), io::ErrorKind::PermissionDenied | io::ErrorKind::NotFound) => {
            return Err(CoreError::from_io(src, e));
        }
        Err(e) => {
            tracing::debug!("rename {} failed ({e}); copying instead", src.display());
            copy_entry(src, &dest, &meta, cancel, 0)?;
            delete_recursive(src)?;
        }
    }

    tracing::info!("moved {} -> {}", src.display(), dest.display());
    Ok(dest)
}

/// Maximum directory depth for recursive copies, guarding against loops.
const MAX_COPY_DEPTH: usize = 64;

fn copy_entry(
    src: &Path,
    dest: &Path,
    meta: &fs::Metadata,
    cancel: &CancelToken,
    depth: usize,
) -> CoreResult<()> {
    if meta.is_symlink() {
        copy_symlink(src, dest)
    } else if meta.is_dir() {
        copy_dir_recursive(src, dest, cancel, depth)
    } else {
        copy_regular_file(src, dest, meta)
    }
}

fn copy_dir_recursive(
    src: &Path,
    dest: &Path,
    cancel: &CancelToken,
    depth: usize,
) -> CoreResult<()> {
    if depth > MAX_COPY_DEPTH {
        return Err(CoreError::Os {
            path: src.to_path_buf(),
            message: format!("maximum copy depth ({MAX_COPY_DEPTH}) exceeded"),
        });
    }

    fs::create_dir(dest).at(dest)?;

    for entry in fs::read_dir(src).at(src)? {
        cancel.check()?;
        let entry = entry.at(src)?;
        let entry_path = entry.path();
        // symlink_metadata so links are copied as links, never followed.
        let meta = fs::symlink_metadata(&entry_path).at(&entry_path)?;
        copy_entry(&entry_path, &dest.join(entry.file_name()), &meta, cancel, depth + 1)?;
    }

    Ok(())
}

fn copy_regular_file(src: &Path, dest: &Path, meta: &fs::Metadata) -> CoreResult<()> {
    fs::copy(src, dest).at(src)?;

    if let Ok(mtime) = meta.modified() {
        let stamped = OpenOptions::new()
            .write(true)
            .open(dest)
            .and_then(|f| f.set_modified(mtime));
        if let Err(e) = stamped {
            tracing::debug!("could not preserve mtime on {}: {e}", dest.display());
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dest: &Path) -> CoreResult<()> {
    let link_target = fs::read_link(src).at(src)?;
    std::os::unix::fs::symlink(&link_target, dest).at(dest)
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dest: &Path) -> CoreResult<()> {
    fs::copy(src, dest).at(src).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(entries: &[DirectoryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name()).collect()
    }

    // --- list_directory ---

    #[test]
    fn list_returns_immediate_children_sorted() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.txt"), "").unwrap();
        fs::write(tmp.path().join("A.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub").join("nested.txt"), "").unwrap();

        let entries = list_directory(tmp.path()).unwrap();

        assert_eq!(names(&entries), vec!["A.txt", "b.txt", "sub"]);
        let sub = entries.iter().find(|e| e.name() == "sub").unwrap();
        assert!(sub.is_dir());
        assert!(entries.iter().filter(|e| !e.is_dir()).all(|e| e.modified().is_some()));
    }

    #[test]
    fn list_empty_directory() {
        let tmp = TempDir::new().unwrap();
        assert!(list_directory(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn list_nonexistent_returns_path_not_found() {
        let result = list_directory(Path::new("/nonexistent/path/that/does/not/exist"));
        assert!(matches!(result, Err(CoreError::PathNotFound(_))));
    }

    #[test]
    fn list_on_file_returns_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("f.txt");
        fs::write(&file, "x").unwrap();

        assert!(matches!(
            list_directory(&file),
            Err(CoreError::NotADirectory(_))
        ));
    }

    #[test]
    fn list_includes_hidden_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".hidden"), "").unwrap();
        fs::write(tmp.path().join("visible.txt"), "").unwrap();

        let entries = list_directory(tmp.path()).unwrap();
        assert_eq!(names(&entries), vec![".hidden", "visible.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn list_marks_symlinked_directory_as_dir() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("real")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("link")).unwrap();

        let entries = list_directory(tmp.path()).unwrap();
        assert!(entries.iter().all(|e| e.is_dir()));
    }

    // --- create ---

    #[test]
    fn create_file_makes_empty_file() {
        let tmp = TempDir::new().unwrap();
        let path = create_file(tmp.path(), "new.txt").unwrap();

        assert_eq!(path, tmp.path().join("new.txt"));
        assert_eq!(fs::read(&path).unwrap().len(), 0);
    }

    #[test]
    fn create_file_collision_is_already_exists() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "keep me").unwrap();

        let result = create_file(tmp.path(), "a.txt");
        assert!(matches!(result, Err(CoreError::AlreadyExists(_))));
        assert_eq!(fs::read_to_string(tmp.path().join("a.txt")).unwrap(), "keep me");
    }

    #[test]
    fn create_file_rejects_bad_name() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            create_file(tmp.path(), "x/y"),
            Err(CoreError::InvalidName(_))
        ));
    }

    #[test]
    fn create_directory_nested() {
        let tmp = TempDir::new().unwrap();
        let path = create_directory(tmp.path(), "a/b/c").unwrap();

        assert!(path.is_dir());
        assert_eq!(path, tmp.path().join("a").join("b").join("c"));
    }

    #[test]
    fn create_directory_collision_and_invalid() {
        let tmp = TempDir::new().unwrap();
        create_directory(tmp.path(), "sub").unwrap();

        assert!(matches!(
            create_directory(tmp.path(), "sub"),
            Err(CoreError::AlreadyExists(_))
        ));
        assert!(matches!(
            create_directory(tmp.path(), "a/../b"),
            Err(CoreError::InvalidName(_))
        ));
        assert!(matches!(
            create_directory(tmp.path(), ""),
            Err(CoreError::InvalidName(_))
        ));
    }

    // --- delete ---

    #[test]
    fn delete_regular_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("bye.txt");
        fs::write(&file, "bye").unwrap();

        delete(&file).unwrap();
        assert!(!file.exists());
    }

    #[test]
    fn delete_empty_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("empty");
        fs::create_dir(&dir).unwrap();

        delete(&dir).unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn delete_non_empty_directory_is_refused() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("full");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("inside.txt"), "").unwrap();

        assert!(matches!(delete(&dir), Err(CoreError::NotEmpty(_))));
        assert!(dir.join("inside.txt").exists());
    }

    #[test]
    fn delete_nonexistent_returns_path_not_found() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            delete(&tmp.path().join("ghost")),
            Err(CoreError::PathNotFound(_))
        ));
    }

    #[test]
    fn delete_recursive_removes_tree() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("tree");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("nested").join("deep.txt"), "").unwrap();

        delete_recursive(&dir).unwrap();
        assert!(!dir.exists());
    }

    // --- rename ---

    #[test]
    fn rename_file_in_place() {
        let tmp = TempDir::new().unwrap();
        let old = tmp.path().join("a.txt");
        fs::write(&old, "data").unwrap();

        let new = rename(&old, "c.txt").unwrap();

        assert!(!old.exists());
        assert_eq!(fs::read_to_string(new).unwrap(), "data");
    }

    #[test]
    fn rename_collision_is_already_exists() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "a").unwrap();
        fs::write(tmp.path().join("b.txt"), "b").unwrap();

        let result = rename(&tmp.path().join("a.txt"), "b.txt");
        assert!(matches!(result, Err(CoreError::AlreadyExists(_))));
        assert_eq!(fs::read_to_string(tmp.path().join("b.txt")).unwrap(), "b");
    }

    #[test]
    fn rename_invalid_names() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, "").unwrap();

        for bad in ["", ".", "..", "x/y", "nul\0"] {
            assert!(
                matches!(rename(&file, bad), Err(CoreError::InvalidName(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn rename_nonexistent_returns_path_not_found() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(
            rename(&tmp.path().join("ghost"), "x"),
            Err(CoreError::PathNotFound(_))
        ));
    }

    // --- copy_into / move_into ---

    #[test]
    fn copy_into_file_keeps_source_and_mtime() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.txt");
        let target = tmp.path().join("target");
        fs::write(&src, "content").unwrap();
        fs::create_dir(&target).unwrap();

        let dest = copy_into(&src, &target, &CancelToken::new()).unwrap();

        assert!(src.exists());
        assert_eq!(dest, target.join("src.txt"));
        assert_eq!(fs::read_to_string(&dest).unwrap(), "content");
        assert_eq!(
            fs::metadata(&src).unwrap().modified().unwrap(),
            fs::metadata(&dest).unwrap().modified().unwrap()
        );
    }

    #[test]
    fn copy_into_directory_recursive() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("tree");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("a.txt"), "aaa").unwrap();
        fs::write(src.join("nested").join("b.txt"), "bbb").unwrap();
        let target = tmp.path().join("target");
        fs::create_dir(&target).unwrap();

        let dest = copy_into(&src, &target, &CancelToken::new()).unwrap();

        assert!(src.join("a.txt").exists());
        assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "aaa");
        assert_eq!(
            fs::read_to_string(dest.join("nested").join("b.txt")).unwrap(),
            "bbb"
        );
    }

    #[test]
    fn copy_into_same_directory_collides() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        fs::write(&src, "").unwrap();

        let result = copy_into(&src, tmp.path(), &CancelToken::new());
        assert!(matches!(result, Err(CoreError::AlreadyExists(_))));
    }

    #[test]
    fn copy_into_own_subtree_is_refused() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("tree");
        fs::create_dir_all(src.join("inner")).unwrap();

        let result = copy_into(&src, &src.join("inner"), &CancelToken::new());
        assert!(matches!(result, Err(CoreError::IntoItself(_))));
    }

    #[test]
    fn copy_into_cancelled_before_start() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        fs::write(&src, "").unwrap();
        let target = tmp.path().join("t");
        fs::create_dir(&target).unwrap();

        let token = CancelToken::new();
        token.cancel();

        assert!(matches!(
            copy_into(&src, &target, &token),
            Err(CoreError::Cancelled)
        ));
        assert!(!target.join("a.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn copy_into_preserves_symlinks() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("tree");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("real.txt"), "r").unwrap();
        std::os::unix::fs::symlink("real.txt", src.join("link.txt")).unwrap();
        let target = tmp.path().join("t");
        fs::create_dir(&target).unwrap();

        let dest = copy_into(&src, &target, &CancelToken::new()).unwrap();

        let link_meta = fs::symlink_metadata(dest.join("link.txt")).unwrap();
        assert!(link_meta.is_symlink());
        assert_eq!(
            fs::read_link(dest.join("link.txt")).unwrap(),
            PathBuf::from("real.txt")
        );
    }

    #[test]
    fn move_into_relocates_file() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        fs::write(&src, "moved").unwrap();
        let target = tmp.path().join("t");
        fs::create_dir(&target).unwrap();

        let dest = move_into(&src, &target, &CancelToken::new()).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read_to_string(dest).unwrap(), "moved");
    }

    #[test]
    fn move_into_relocates_directory() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("dir");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("x.txt"), "x").unwrap();
        let target = tmp.path().join("t");
        fs::create_dir(&target).unwrap();

        let dest = move_into(&src, &target, &CancelToken::new()).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read_to_string(dest.join("x.txt")).unwrap(), "x");
    }

    #[test]
    fn move_into_nonexistent_returns_path_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = move_into(&tmp.path().join("ghost"), tmp.path(), &CancelToken::new());
        assert!(matches!(result, Err(CoreError::PathNotFound(_))));
    }

    #[test]
    fn cancel_token_is_shared_between_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
