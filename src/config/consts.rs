// src/config/consts.rs

// Net config
pub const SOURCE_BASE: &str = "https://live.nowgoal.com";
pub const UPCOMING_PATH: &str = "/football/fixtures";
pub const FINISHED_PATH: &str = "/football/results";
pub const H2H_PATH: &str = "/match/h2h-"; // + id
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";
pub const HTTP_TIMEOUT_SECS: u64 = 20;
pub const MAX_BODY_BYTES: u64 = 8 * 1024 * 1024;

// Browser
pub const BROWSER_CANDIDATES: &[&str] = &[
    "chromium",
    "chromium-browser",
    "google-chrome",
    "google-chrome-stable",
];
pub const BROWSER_TIMEOUT_SECS: u64 = 60;

// Artifacts (relative to the data root)
pub const DATA_CANDIDATES: &[&str] = &["data.json", "src/data.json"];
pub const PREVIEW_DIRS: &[&str] = &["src/static/cached_previews", "static/cached_previews"];

// Scrape
pub const REFRESH_LIMIT_UPCOMING: usize = 40;
pub const REFRESH_LIMIT_FINISHED: usize = 40;
pub const CLI_LIMIT_DEFAULT: usize = 30;

// Server
pub const DEFAULT_PORT: u16 = 8501;
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

// Logs
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "panel.log";

// Display
pub const NA: &str = "N/A";
pub const DISPLAY_TIME_FMT: &str = "%d/%m %H:%M";
pub const STORE_TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S";
