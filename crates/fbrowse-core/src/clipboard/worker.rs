//! Background paste execution.
//!
//! [`spawn_paste`] runs a [`PasteJob`] on tokio's blocking pool so the
//! control thread stays responsive during large copies. Progress and the
//! final report come back over an unbounded mpsc channel; the control thread
//! then calls [`Clipboard::settle`](super::Clipboard::settle) with the report.

use std::path::PathBuf;

use tokio::sync::mpsc::UnboundedSender;

use super::{PasteJob, PasteProgress, PasteReport};
use crate::fs::ops::CancelToken;

/// Messages sent from a paste task to the control thread.
#[derive(Debug)]
pub enum PasteMessage {
    Started { total: usize, target: PathBuf },
    Progress(PasteProgress),
    Finished(PasteReport),
    /// The paste could not start at all (e.g. the target vanished).
    Failed(String),
}

/// Handle to a running background paste.
#[derive(Debug, Clone)]
pub struct PasteHandle {
    cancel: CancelToken,
}

impl PasteHandle {
    /// Asks the paste to stop. Items not yet started report
    /// [`CoreError::Cancelled`](crate::CoreError::Cancelled).
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Spawns `job` into `target` on the blocking pool.
///
/// Must be called from within a tokio runtime.
pub fn spawn_paste(job: PasteJob, target: PathBuf, tx: UnboundedSender<PasteMessage>) -> PasteHandle {
    spawn_paste_with(job, target, CancelToken::new(), tx)
}

/// Like [`spawn_paste`], observing a caller-supplied cancellation token.
pub fn spawn_paste_with(
    job: PasteJob,
    target: PathBuf,
    cancel: CancelToken,
    tx: UnboundedSender<PasteMessage>,
) -> PasteHandle {
    let handle = PasteHandle {
        cancel: cancel.clone(),
    };

    tokio::task::spawn_blocking(move || {
        let _ = tx.send(PasteMessage::Started {
            total: job.sources().len(),
            target: target.clone(),
        });
        let progress_tx = tx.clone();
        let result = job.run(&target, &cancel, |p| {
            let _ = progress_tx.send(PasteMessage::Progress(p));
        });
        let message = match result {
            Ok(report) => PasteMessage::Finished(report),
            Err(e) => PasteMessage::Failed(e.to_string()),
        };
        let _ = tx.send(message);
    });

    handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::Clipboard;
    use std::fs;
    use tempfile::TempDir;
    use tokio::sync::mpsc;

    async fn drain(mut rx: mpsc::UnboundedReceiver<PasteMessage>) -> Vec<PasteMessage> {
        let mut messages = Vec::new();
        while let Some(msg) = rx.recv().await {
            let done = matches!(msg, PasteMessage::Finished(_) | PasteMessage::Failed(_));
            messages.push(msg);
            if done {
                break;
            }
        }
        messages
    }

    #[tokio::test]
    async fn background_cut_reports_progress_and_settles() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        let dst = tmp.path().join("dst");
        fs::write(&src, "A").unwrap();
        fs::create_dir(&dst).unwrap();

        let mut clip = Clipboard::new();
        clip.stage_cut(vec![src.clone()]);
        let (tx, rx) = mpsc::unbounded_channel();

        spawn_paste(clip.job().unwrap(), dst.clone(), tx);
        let messages = drain(rx).await;

        assert!(matches!(messages[0], PasteMessage::Started { total: 1, .. }));
        assert!(matches!(messages[1], PasteMessage::Progress(_)));
        let PasteMessage::Finished(report) = messages.last().unwrap() else {
            panic!("expected Finished, got {messages:?}");
        };
        assert!(report.is_success());
        assert!(dst.join("a.txt").exists());

        clip.settle(report);
        assert!(clip.is_empty());
    }

    #[tokio::test]
    async fn background_paste_into_missing_target_fails() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a.txt");
        fs::write(&src, "A").unwrap();

        let mut clip = Clipboard::new();
        clip.stage_copy(vec![src]);
        let (tx, rx) = mpsc::unbounded_channel();

        spawn_paste(clip.job().unwrap(), tmp.path().join("missing"), tx);
        let messages = drain(rx).await;

        assert!(matches!(messages.last(), Some(PasteMessage::Failed(_))));
    }

    #[tokio::test]
    async fn cancelled_handle_skips_items() {
        let tmp = TempDir::new().unwrap();
        let dst = tmp.path().join("dst");
        fs::create_dir(&dst).unwrap();
        let sources: Vec<PathBuf> = (0..3)
            .map(|i| {
                let p = tmp.path().join(format!("f{i}.txt"));
                fs::write(&p, "x").unwrap();
                p
            })
            .collect();

        let mut clip = Clipboard::new();
        clip.stage_copy(sources);
        let (tx, rx) = mpsc::unbounded_channel();

        let token = CancelToken::new();
        token.cancel();
        let handle = spawn_paste_with(clip.job().unwrap(), dst.clone(), token, tx);
        assert!(handle.is_cancelled());

        let messages = drain(rx).await;
        let PasteMessage::Finished(report) = messages.last().unwrap() else {
            panic!("expected Finished, got {messages:?}");
        };
        assert_eq!(report.failed().count(), 3);
        assert!(fs::read_dir(&dst).unwrap().next().is_none());
    }
}
