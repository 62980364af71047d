// src/gui/actions/analyze.rs
use crate::{
    gui::app::{App, JobResult},
    scrape,
};

/// "Live analysis" for the selected match (headless browser, worker thread).
pub fn analyze(app: &mut App) {
    if app.running {
        return;
    }
    let Some(id) = app.state.gui.selected_match_id.clone() else {
        app.status("Pick a match before running the analysis.");
        return;
    };
    if !app.browser_available {
        app.status("No browser available for live analysis (set CHROME_BINARY).");
        return;
    }
    let opts = app.state.options.clone();
    logf!("Analysis: Begin {id}");
    app.status(format!("Analysing match {id}…"));

    super::spawn_job(app, move || {
        let res = scrape::analyze_match(&opts, &id);
        JobResult::Analyzed(id, res)
    });
}
