// src/gui/actions/preview.rs
use crate::gui::app::App;

/// "Quick preview": open the panel for the selected match.
pub fn quick_preview(app: &mut App) {
    if app.state.gui.pin_selected() {
        logd!("UI: Preview → {:?}", app.state.gui.active_preview_id);
        app.invalidate_preview();
        app.status("Preview loaded");
    } else {
        app.status("Pick a match before asking for the preview.");
    }
}

pub fn clear_uploaded_preview(app: &mut App) {
    app.uploaded_preview = None;
    app.invalidate_preview();
    app.status("Uploaded analysis cleared");
}
