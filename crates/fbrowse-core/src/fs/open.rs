//! Hands a file to the host's default application.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{CoreError, CoreResult};

/// Program and leading arguments of the platform's "open with default
/// application" launcher.
fn launcher() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(windows) {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

/// Opens `path` with the default application, fire-and-forget.
///
/// Only spawning the launcher is reported; what the launched application
/// does afterwards is not observed.
///
/// # Errors
///
/// - [`CoreError::PathNotFound`] if `path` does not exist.
/// - [`CoreError::Os`] if the launcher could not be started.
pub fn open_with_default(path: &Path) -> CoreResult<()> {
    if !path.exists() {
        return Err(CoreError::PathNotFound(path.to_path_buf()));
    }

    let (program, args) = launcher();
    Command::new(program)
        .args(args)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_child| {
            tracing::info!("opened {} with {program}", path.display());
        })
        .map_err(|e| {
            tracing::warn!("failed to launch {program} for {}: {e}", path.display());
            CoreError::Os {
                path: path.to_path_buf(),
                message: format!("could not start {program}: {e}"),
            }
        })
}
