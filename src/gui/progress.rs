// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
    failed: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0, failed: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, what: &str, count: usize) {
        self.done += 1;
        self.set_status(format!("{what}: {count} matches ({}/{})", self.done, self.total));
    }
    fn item_failed(&mut self, what: &str, _err: &str) {
        self.done += 1;
        self.failed += 1;
        self.set_status(format!("{what}: failed ({}/{})", self.done, self.total));
    }
    fn finish(&mut self) {
        if self.failed > 0 {
            self.set_status(format!("Refresh finished with {} failed list(s)", self.failed));
        } else {
            self.set_status(s!("Refresh complete"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_items() {
        let status = Arc::new(Mutex::new(s!()));
        let mut p = GuiProgress::new(status.clone());
        p.begin(2);
        p.item_done("Upcoming", 12);
        assert_eq!(*status.lock().unwrap(), "Upcoming: 12 matches (1/2)");
        p.item_failed("Finished", "boom");
        p.finish();
        assert_eq!(*status.lock().unwrap(), "Refresh finished with 1 failed list(s)");
    }
}
