// tests/preview_cache.rs
//
// Cached analysis lookup and the panel rendered from it.

mod support;

use match_panel::{
    error::PanelError,
    preview::{PanelHeader, Preview},
    render::render_panel,
    scrape,
    store::{self, PreviewSource},
};
use support::{options_at, sample_data, sample_preview, write_json};

#[test]
fn cached_preview_drives_the_panel() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options_at(dir.path());
    write_json(&dir.path().join("data.json"), &sample_data());
    write_json(&dir.path().join("src/static/cached_previews/201.json"), &sample_preview());

    let (ds, _) = store::load_dataset(&opts.data, None).unwrap();
    let m = ds.find("201").unwrap();

    let (p, src) = store::resolve_preview(&opts.data, None, Some("201"));
    assert_eq!(src, PreviewSource::LocalCache);
    let p = p.unwrap();

    let h = PanelHeader::resolve(m, Some(&p));
    assert_eq!(h.score, "?-?");
    assert_eq!(h.handicap, "-0.5");

    let html = render_panel(Some(m), Some(&p), src.label());
    assert!(html.contains("Data source: Local cache"));
    assert!(html.contains("Real Sociedad vs Getafe"));
    assert!(html.contains("COVERED"));
    assert!(html.contains("Over 50%"));
}

#[test]
fn missing_preview_shows_hint() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options_at(dir.path());
    write_json(&dir.path().join("data.json"), &sample_data());
    let (ds, _) = store::load_dataset(&opts.data, None).unwrap();

    let (p, src) = store::resolve_preview(&opts.data, None, Some("200"));
    assert!(p.is_none());
    let html = render_panel(ds.find("200"), None, src.label());
    assert!(html.contains("No cached analysis for this match"));
}

#[test]
fn saved_preview_keeps_unknown_keys() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options_at(dir.path());
    let mut raw = sample_preview();
    raw["extra_block"] = serde_json::json!({"keep": true});
    let p = Preview::from_value(raw, "fixture").unwrap();

    let path = store::save_preview(&opts.data.preview_write_dir(), "201", &p).unwrap();
    assert!(path.ends_with("201.json"));
    let back = store::load_cached_preview(&opts.data, "201").unwrap();
    assert_eq!(back.raw_json()["extra_block"]["keep"], true);
}

#[test]
fn live_analysis_rejects_unsafe_ids() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = options_at(dir.path());
    opts.browser.binary = Some(dir.path().join("missing/chromium"));

    match scrape::analyze_match(&opts, "../etc") {
        Err(PanelError::InvalidId(_)) => {}
        other => panic!("expected InvalidId, got {other:?}"),
    }
}
