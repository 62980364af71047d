// src/error.rs
use std::path::PathBuf;

/// Everything the library can fail with. Frontends decide how to surface it:
/// status line (GUI), HTTP status (server), error report (CLI).
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {what}: {source}")]
    Json {
        what: String,
        source: serde_json::Error,
    },

    #[error("HTTP request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("No browser binary available (set CHROME_BINARY or install chromium)")]
    BrowserUnavailable,

    #[error("Browser exited with {status}: {stderr}")]
    BrowserFailed { status: String, stderr: String },

    #[error("Browser did not finish within {secs}s")]
    BrowserTimeout { secs: u64 },

    #[error("{url} had no match data")]
    EmptyPage { url: String },

    #[error("Invalid match id: {0:?}")]
    InvalidId(String),

    #[error("Nothing could be scraped from either match list")]
    NothingScraped,
}

impl PanelError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn json(what: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json { what: what.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, PanelError>;
