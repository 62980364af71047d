// src/gui/components/analysis_panel.rs
//
// Central panel: the pinned match with its cached (or uploaded, or live)
// analysis. Read-only view over `App`.

use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    data::Match,
    gui::app::App,
    preview::{ComparisonCard, CoverStatus, OuStats, PanelHeader, Preview, RecentCard, Standings, StatRow},
};

const HOME: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB);
const AWAY: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);
const OK: Color32 = Color32::from_rgb(0x16, 0xA3, 0x4A);
const KO: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);
const NEUTRAL: Color32 = Color32::from_rgb(0x64, 0x74, 0x8B);

fn or_dash(v: &Option<String>) -> &str {
    v.as_deref().filter(|s| !s.is_empty()).unwrap_or("-")
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(m) = app.active_match() else {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Select a match and press \"Quick preview\" to see its analysis.").weak(),
            );
        });
        return;
    };

    let preview = app.preview.as_ref();
    let source = app.preview_source.label();
    let mut show_raw = app.state.gui.show_raw_json;

    egui::ScrollArea::vertical()
        .id_salt("analysis_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            header(ui, m, preview, source);
            ui.separator();

            let Some(p) = preview else {
                ui.label(
                    RichText::new(
                        "No cached analysis for this match. Upload an analysis JSON or run live analysis.",
                    )
                    .weak(),
                );
                return;
            };

            let h = PanelHeader::resolve(m, Some(p));
            section(ui, "Advanced match analysis");
            standings(ui, p, &h.home, &h.away);

            section(ui, "Recent history");
            let r = p.recent.as_ref();
            ui.columns(3, |cols| {
                recent_card(&mut cols[0], "Last home match", r.and_then(|r| r.last_home()), HOME);
                recent_card(&mut cols[1], "Last away match", r.and_then(|r| r.last_away()), AWAY);
                recent_card(&mut cols[2], "Reference H2H", r.and_then(|r| r.h2h()), NEUTRAL);
            });

            section(ui, "Indirect comparisons");
            match p.comparisons.as_ref().filter(|c| !c.is_empty()) {
                Some(c) => ui.columns(2, |cols| {
                    comparison_card(&mut cols[0], "Home vs away side's last opponent", c.left());
                    comparison_card(&mut cols[1], "Away vs home side's last opponent", c.right());
                }),
                None => {
                    ui.label(RichText::new("No indirect comparisons saved.").weak());
                }
            }

            if let Some(market) = p.market_html() {
                ui.add_space(8.0);
                egui::CollapsingHeader::new("Market / H2H view (HTML)")
                    .id_salt("market_html")
                    .show(ui, |ui| {
                        ui.label(RichText::new(market).monospace().small());
                    });
            }

            ui.add_space(8.0);
            let open = egui::CollapsingHeader::new("View analysis JSON")
                .id_salt("raw_json")
                .default_open(show_raw)
                .show(ui, |ui| {
                    let text = serde_json::to_string_pretty(&p.raw_json()).unwrap_or_default();
                    ui.label(RichText::new(text).monospace().small());
                });
            if open.header_response.clicked() {
                show_raw = !show_raw;
            }
        });
    app.state.gui.show_raw_json = show_raw;
}

fn section(ui: &mut egui::Ui, title: &str) {
    ui.add_space(10.0);
    ui.label(RichText::new(title).strong().size(16.0));
    ui.add_space(4.0);
}

fn header(ui: &mut egui::Ui, m: &Match, preview: Option<&Preview>, source: &str) {
    let h = PanelHeader::resolve(m, preview);
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(format!("Data source: {source}")).small().weak());
            ui.horizontal(|ui| {
                ui.label(RichText::new(&h.home).heading().color(HOME));
                ui.label(RichText::new("vs").heading());
                ui.label(RichText::new(&h.away).heading().color(AWAY));
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("AH {}", h.handicap)).strong());
                ui.label(RichText::new(format!("O/U {}", h.goal_line)).strong());
            });
            ui.label(RichText::new(format!("ID {} | {}", h.id, h.time)).small().weak());
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Score").small().weak());
                ui.label(RichText::new(&h.score).size(28.0).strong());
            });
        });
    });
}

fn cover_badge(ui: &mut egui::Ui, raw: Option<&str>) {
    let Some(st) = raw.and_then(CoverStatus::classify) else { return };
    let color = match st {
        CoverStatus::Covered => OK,
        CoverStatus::NotCovered => KO,
        CoverStatus::Push | CoverStatus::Other(_) => NEUTRAL,
    };
    ui.label(RichText::new(st.label()).strong().color(color));
}

fn stat_rows(ui: &mut egui::Ui, salt: &str, rows: &[StatRow]) {
    if rows.is_empty() {
        return;
    }
    TableBuilder::new(ui)
        .id_salt(("stat_rows", salt))
        .striped(true)
        .vscroll(false)
        .column(Column::remainder().at_least(30.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder().at_least(30.0))
        .body(|mut body| {
            for r in rows {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(RichText::new(or_dash(&r.home)).color(HOME));
                    });
                    row.col(|ui| {
                        ui.centered_and_justified(|ui| {
                            ui.label(RichText::new(or_dash(&r.label)).small());
                        });
                    });
                    row.col(|ui| {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(RichText::new(or_dash(&r.away)).color(AWAY));
                        });
                    });
                });
            }
        });
}

fn recent_card(ui: &mut egui::Ui, title: &str, card: Option<&RecentCard>, accent: Color32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(RichText::new(title).strong().color(accent));
        let Some(c) = card else {
            ui.label(RichText::new("No data available.").weak());
            return;
        };
        ui.label(RichText::new(or_dash(&c.score)).size(20.0).strong());
        ui.label(format!("{} vs {}", or_dash(&c.home), or_dash(&c.away)));
        if let Some(d) = c.date.as_deref().filter(|d| !d.is_empty()) {
            ui.label(RichText::new(d).small().weak());
        }
        ui.label(format!("AH: {} / O/U: {}", or_dash(&c.ah), or_dash(&c.ou)));
        cover_badge(ui, c.cover_status.as_deref());
        stat_rows(ui, title, &c.stats_rows);
    });
}

fn comparison_card(ui: &mut egui::Ui, title: &str, card: Option<&ComparisonCard>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(RichText::new(title).strong());
        let Some(c) = card else {
            ui.label(RichText::new("Not available.").weak());
            return;
        };
        ui.label(RichText::new(or_dash(&c.score)).strong());
        ui.label(format!("{} vs {}", or_dash(&c.home_team), or_dash(&c.away_team)));
        ui.label(format!("AH: {} / O/U: {}", or_dash(&c.ah), or_dash(&c.ou)));
        ui.label(format!("Venue: {}", or_dash(&c.venue)));
        cover_badge(ui, c.cover_status.as_deref());
        stat_rows(ui, title, &c.stats_rows);
        if let Some(a) = c.analysis.as_deref().filter(|a| !a.is_empty()) {
            ui.label(RichText::new(a).small());
        }
    });
}

fn standings(ui: &mut egui::Ui, p: &Preview, home: &str, away: &str) {
    if !p.has_standings_data() {
        ui.label(RichText::new("No standings or over/under data in the cached analysis.").weak());
        return;
    }
    ui.columns(2, |cols| {
        standings_block(&mut cols[0], home, p.home_standings(), p.home_ou(), HOME);
        standings_block(&mut cols[1], away, p.away_standings(), p.away_ou(), AWAY);
    });
}

fn standings_block(ui: &mut egui::Ui, team: &str, st: Option<&Standings>, ou: Option<&OuStats>, accent: Color32) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(RichText::new(team).strong().size(15.0).color(accent));
        if let Some(s) = st {
            ui.label(format!("Position: {}", or_dash(&s.ranking)));
            ui.label(format!(
                "P: {} | W-D-L: {}-{}-{} | GF:GA {}:{}",
                or_dash(&s.played),
                or_dash(&s.won),
                or_dash(&s.drawn),
                or_dash(&s.lost),
                or_dash(&s.goals_for),
                or_dash(&s.goals_against),
            ));
            if let Some(kind) = s.specific_type.as_deref().filter(|k| !k.is_empty()) {
                ui.label(format!(
                    "{kind}: P {} | W-D-L {}-{}-{} | GF:GA {}:{}",
                    or_dash(&s.specific_played),
                    or_dash(&s.specific_won),
                    or_dash(&s.specific_drawn),
                    or_dash(&s.specific_lost),
                    or_dash(&s.specific_goals_for),
                    or_dash(&s.specific_goals_against),
                ));
            }
        }
        if let Some(o) = ou.filter(|o| o.has_sample()) {
            ui.horizontal_wrapped(|ui| {
                ui.label(format!("O/U last {}:", or_dash(&o.total)));
                ui.label(RichText::new(format!("Over {}%", or_dash(&o.over_pct))).color(OK));
                ui.label(RichText::new(format!("Under {}%", or_dash(&o.under_pct))).color(KO));
                ui.label(RichText::new(format!("Push {}%", or_dash(&o.push_pct))).color(NEUTRAL));
            });
        }
    });
}
