// src/gui/components/header.rs
//
// Title row: data source pill, list counts and the three main actions.

use eframe::egui::{self, RichText, widgets::Spinner};
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.heading("Match panel");
        ui.label(RichText::new(app.source.label()).small().strong());
        let (up, fin) = app.dataset.counts();
        ui.label(RichText::new(format!("{up} upcoming · {fin} finished")).small().weak());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(!app.running, egui::Button::new("Refresh data"))
                .on_hover_text("Light scrape of the upcoming and finished lists")
                .clicked()
            {
                actions::refresh(app);
            }

            let can_analyze = !app.running
                && app.browser_available
                && app.state.gui.selected_match_id.is_some();
            let hover = if app.browser_available {
                "Run the headless browser on the selected match"
            } else {
                "No browser found (set CHROME_BINARY)"
            };
            if ui
                .add_enabled(can_analyze, egui::Button::new("Live analysis"))
                .on_hover_text(hover)
                .on_disabled_hover_text(hover)
                .clicked()
            {
                actions::analyze(app);
            }

            if ui.button("Quick preview").clicked() {
                actions::quick_preview(app);
            }
        });
    });

    ui.horizontal(|ui| {
        if app.running {
            ui.add(Spinner::new());
        }
        ui.label(app.status_text());
    });
    ui.add_space(2.0);
}
