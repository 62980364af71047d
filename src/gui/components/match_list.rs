// src/gui/components/match_list.rs
//
// Left side: list tabs, team search and the clickable match rows.
// Clicking a row only moves the selection; the panel follows "Quick preview".

use eframe::egui::{self, RichText};
use crate::{data::ListTab, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Matches");

    let prev_tab = app.state.gui.tab;
    ui.horizontal(|ui| {
        for t in ListTab::ALL {
            ui.selectable_value(&mut app.state.gui.tab, t, t.label());
        }
    });
    if app.state.gui.tab != prev_tab {
        logd!("UI: Tab → {}", app.state.gui.tab);
        app.sync_selection();
    }

    let search = ui.add(
        egui::TextEdit::singleline(&mut app.state.gui.search)
            .hint_text("Search by team")
            .desired_width(f32::INFINITY),
    );
    if search.changed() {
        app.sync_selection();
    }

    // Rows are cloned out so the click handler can borrow `app` mutably.
    let rows: Vec<(String, String)> = app.view().into_iter().map(|m| (m.id.clone(), m.label())).collect();

    ui.label(RichText::new(format!("Showing {} matches", rows.len())).small().weak());
    ui.separator();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    egui::ScrollArea::vertical()
        .id_salt("match_list_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if rows.is_empty() {
                ui.label(RichText::new("No matches for this list.").weak());
                return;
            }
            let w = ui.available_width();
            ui.set_min_width(w);
            for (id, label) in &rows {
                let selected = app.state.gui.selected_match_id.as_deref() == Some(id.as_str());
                let resp = ui.selectable_label(selected, label.as_str());
                if resp.clicked() && !selected {
                    app.state.gui.selected_match_id = Some(id.clone());
                    logd!("UI: Selected {id}");
                }
            }
        });
}
