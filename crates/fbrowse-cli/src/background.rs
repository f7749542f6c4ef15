//! Background paste driver.
//!
//! Runs a [`PasteJob`] through [`spawn_paste`] and relays its progress to
//! the shell while the copy happens on tokio's blocking pool. Ctrl-C during
//! a paste cancels the items that have not started yet.

use std::path::PathBuf;

use fbrowse_core::{spawn_paste, PasteJob, PasteMessage, PasteReport};
use tokio::sync::mpsc;

/// Runs `job` into `target`, calling `print` for each progress line.
///
/// Returns the final report, or the reason the paste could not run.
pub async fn run_paste(
    job: PasteJob,
    target: PathBuf,
    mut print: impl FnMut(String),
) -> Result<PasteReport, String> {
    let (tx, mut rx) = mpsc::unbounded_channel::<PasteMessage>();
    let handle = spawn_paste(job, target, tx);

    loop {
        tokio::select! {
            msg = rx.recv() => match msg {
                Some(PasteMessage::Started { total, target }) => {
                    print(format!("pasting {total} item(s) into {}", target.display()));
                }
                Some(PasteMessage::Progress(p)) => {
                    print(format!("[{}/{}] {}", p.index + 1, p.total, p.source.display()));
                }
                Some(PasteMessage::Finished(report)) => return Ok(report),
                Some(PasteMessage::Failed(e)) => return Err(e),
                None => return Err("paste task ended without a result".to_string()),
            },
            _ = tokio::signal::ctrl_c(), if !handle.is_cancelled() => {
                tracing::info!("paste cancelled by user");
                print("cancelling paste...".to_string());
                handle.cancel();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fbrowse_core::Clipboard;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn run_paste_reports_progress_lines() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        let dst = tmp.path().join("dst");
        fs::write(&src, "A").unwrap();
        fs::create_dir(&dst).unwrap();

        let mut clip = Clipboard::new();
        clip.stage_copy(vec![src]);

        let mut lines = Vec::new();
        let report = run_paste(clip.job().unwrap(), dst.clone(), |l| lines.push(l))
            .await
            .unwrap();

        assert!(report.is_success());
        assert!(dst.join("a.txt").exists());
        assert!(lines[0].starts_with("pasting 1 item(s) into "));
        assert!(lines[1].starts_with("[1/1] "));
    }

    #[tokio::test]
    async fn run_paste_into_missing_target_errors() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        fs::write(&src, "A").unwrap();

        let mut clip = Clipboard::new();
        clip.stage_copy(vec![src]);

        let result = run_paste(clip.job().unwrap(), tmp.path().join("missing"), |_| {}).await;
        assert!(result.unwrap_err().contains("path not found"));
    }
}
