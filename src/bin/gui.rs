// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use match_panel::{
    config::{options::AppOptions, state::GuiState},
    gui, log,
};

fn app_icon() -> Option<IconData> {
    let img = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/panel.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = img.dimensions();
    Some(IconData { rgba: img.into_raw(), width: w, height: h })
}

fn main() {
    log::init("info");

    let gui_defaults = GuiState::default();
    let mut viewport = ViewportBuilder::default()
        .with_title("Match Panel")
        .with_inner_size([gui_defaults.window_w as f32, gui_defaults.window_h as f32]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, AppOptions::from_env()) {
        eprintln!("GUI failed: {e}");
        std::process::exit(1);
    }
}
