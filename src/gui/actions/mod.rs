// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{analyze, preview, refresh, upload, ...}.

mod analyze; // src/gui/actions/analyze.rs
mod preview; // src/gui/actions/preview.rs
mod refresh; // src/gui/actions/refresh.rs
mod upload;  // src/gui/actions/upload.rs

pub use analyze::analyze;
pub use preview::{clear_uploaded_preview, quick_preview};
pub use refresh::{refresh, reload_local};
pub use upload::{upload_dataset, upload_preview};

use std::{path::Path, sync::mpsc, thread};

use crate::gui::app::{App, JobResult};

/// Run `job` on a worker thread; its result lands in `App::poll_jobs`.
/// One job at a time: callers check `app.running` first.
pub(super) fn spawn_job<F>(app: &mut App, job: F)
where
    F: FnOnce() -> JobResult + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    app.running = true;
    app.jobs = Some(rx);
    thread::spawn(move || {
        let _ = tx.send(job());
    });
}

pub(super) fn read_picked(path: &Path) -> Result<Vec<u8>, String> {
    std::fs::read(path).map_err(|e| format!("{}: {e}", path.display()))
}
