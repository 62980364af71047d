// src/gui/actions/upload.rs
use crate::{
    gui::app::App,
    preview::Preview,
    store,
};

fn pick_json(title: &str) -> Option<std::path::PathBuf> {
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter("JSON", &["json"])
        .pick_file()
}

/// "Upload data.json": replaces the active dataset for this session.
pub fn upload_dataset(app: &mut App) {
    let Some(path) = pick_json("Upload data.json") else { return };
    let bytes = match super::read_picked(&path) {
        Ok(b) => b,
        Err(e) => {
            loge!("Upload: {e}");
            app.status(format!("Error: {e}"));
            return;
        }
    };
    match store::load_dataset(&app.state.options.data, Some(&bytes)) {
        Ok((ds, src)) => {
            app.replace_dataset(ds, src);
            app.status("Dataset loaded");
        }
        Err(e) => {
            loge!("Upload: {e}");
            app.status(format!("Could not read the uploaded data.json: {e}"));
        }
    }
}

/// "Upload analysis JSON": overrides the cache for the active match. A file
/// that doesn't parse leaves the cache in charge.
pub fn upload_preview(app: &mut App) {
    let Some(path) = pick_json("Upload analysis JSON") else { return };
    let parsed = super::read_picked(&path)
        .and_then(|b| Preview::from_slice(&b, "uploaded analysis JSON").map_err(|e| e.to_string()));
    match parsed {
        Ok(p) => {
            app.uploaded_preview = Some(p);
            app.status("Analysis JSON ready");
        }
        Err(e) => {
            logw!("Upload: {e}");
            app.uploaded_preview = None;
            app.status("Could not read the uploaded analysis JSON.");
        }
    }
    app.invalidate_preview();
}
