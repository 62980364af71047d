// src/gui/actions/refresh.rs
use crate::{
    gui::{app::{App, JobResult}, progress::GuiProgress},
    scrape, store,
};

/// "Refresh data": light scrape of both lists on a worker thread.
pub fn refresh(app: &mut App) {
    if app.running {
        return;
    }
    let opts = app.state.options.clone();
    let limits = opts.scrape;
    let status = app.status.clone();

    logf!("Refresh: Begin (limits {}/{})", limits.upcoming, limits.finished);
    app.status("Updating lists (light)…");

    super::spawn_job(app, move || {
        let mut prog = GuiProgress::new(status);
        JobResult::Refreshed(scrape::collect_matches(&opts, limits, Some(&mut prog)))
    });
}

/// "Reload local data": re-read data.json from disk.
pub fn reload_local(app: &mut App) {
    match store::load_dataset(&app.state.options.data, None) {
        Ok((ds, src)) => {
            app.replace_dataset(ds, src);
            app.status("Dataset reloaded");
        }
        Err(e) => {
            loge!("Reload: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}
