// src/progress.rs
/// Lightweight progress reporting used by long-running operations (refresh/analysis).
/// Frontends (GUI/CLI/server) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One logical unit completed (e.g. the fixtures page yielded `count` matches).
    fn item_done(&mut self, _what: &str, _count: usize) {}

    /// One logical unit failed; the operation carries on without it.
    fn item_failed(&mut self, _what: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards everything to the log. Used by the CLI and the server.
pub struct LogProgress;

impl Progress for LogProgress {
    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }
    fn item_done(&mut self, what: &str, count: usize) {
        logf!("{what}: {count} matches");
    }
    fn item_failed(&mut self, what: &str, err: &str) {
        logw!("{what}: {err}");
    }
}
