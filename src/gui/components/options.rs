// src/gui/components/options.rs

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let resp = egui::CollapsingHeader::new("Load JSON / options")
        .id_salt("options_section")
        .default_open(app.state.gui.show_options)
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                if ui.add_enabled(!app.running, egui::Button::new("Upload data.json")).clicked() {
                    actions::upload_dataset(app);
                }
                if ui.button("Upload analysis JSON").clicked() {
                    actions::upload_preview(app);
                }
                if ui
                    .add_enabled(app.uploaded_preview.is_some(), egui::Button::new("Clear uploaded analysis"))
                    .clicked()
                {
                    actions::clear_uploaded_preview(app);
                }
                if ui.add_enabled(!app.running, egui::Button::new("Reload local data")).clicked() {
                    actions::reload_local(app);
                }
            });
            ui.label(
                egui::RichText::new(format!("Data folder: {}", app.state.options.data.root.display()))
                    .small()
                    .weak(),
            );
        });
    if resp.header_response.clicked() {
        app.state.gui.show_options = !app.state.gui.show_options;
    }
}
