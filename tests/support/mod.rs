// tests/support/mod.rs
//
// Shared fixtures: a scratch data root with a data.json and a cached preview.
#![allow(dead_code)]

use std::{fs, path::Path};

use match_panel::config::options::{AppOptions, DataOptions};
use serde_json::{Value, json};

pub fn sample_data() -> Value {
    json!({
        "upcoming_matches": [
            {"id": "201", "home_team": "Real Sociedad", "away_team": "Getafe",
             "handicap": "-0.5", "goal_line": "2.25", "time_obj": "2025-03-02T18:30:00"},
            {"id": "200", "home_team": "Celta", "away_team": "Real Betis",
             "handicap": "0", "goal_line": "2.5", "time_obj": "2025-03-01T16:00:00"},
            {"id": "202", "home_team": "Osasuna", "away_team": "Girona",
             "handicap": "0.25", "goal_line": null, "time": "TBD"}
        ],
        "finished_matches": [
            {"id": "150", "home_team": "Sevilla", "away_team": "Valencia",
             "handicap": "-0.25", "goal_line": "2", "score": "2-1", "time_obj": "2025-02-20T21:00:00"}
        ]
    })
}

pub fn sample_preview() -> Value {
    json!({
        "home_name": "Real Sociedad",
        "away_name": "Getafe",
        "final_score": "?-?",
        "home_ou_stats": {"total": 6, "over_pct": 50, "under_pct": 33.3, "push_pct": 16.7},
        "recent_indirect_full": {
            "last_home": {"score": "1-0", "ah": "-0.5", "ou": "2.25", "cover_status": "CUBIERTO",
                          "home": "Real Sociedad", "away": "Alaves"}
        }
    })
}

pub fn write_json(path: &Path, v: &Value) {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).unwrap();
    }
    fs::write(path, serde_json::to_vec_pretty(v).unwrap()).unwrap();
}

/// Options rooted at `root`, with no browser reachable.
pub fn options_at(root: &Path) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.data = DataOptions { root: root.to_path_buf(), ..Default::default() };
    opts.browser.binary = Some(root.join("no-such-browser"));
    opts
}
