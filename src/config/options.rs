// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub data: DataOptions,
    pub source: SourceOptions,
    pub browser: BrowserOptions,
    pub server: ServerOptions,
    pub scrape: ScrapeLimits,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            data: DataOptions::default(),
            source: SourceOptions::default(),
            browser: BrowserOptions::default(),
            server: ServerOptions::default(),
            scrape: ScrapeLimits::default(),
        }
    }
}

impl AppOptions {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with an injectable lookup (tests, embedding).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut opts = Self::default();

        if let Some(root) = get("PANEL_DATA_ROOT") {
            opts.data.root = PathBuf::from(root);
        }
        if let Some(base) = get("MATCH_SOURCE_URL") {
            opts.source.base_url = base.trim_end_matches('/').to_string();
        }
        if let Some(bin) = get("CHROME_BINARY") {
            opts.browser.binary = Some(PathBuf::from(bin));
        }
        if let Some(secs) = get("BROWSER_TIMEOUT_SECS").and_then(|v| v.parse::<u64>().ok()) {
            opts.browser.timeout_secs = secs.max(1);
        }
        if let Some(port) = get("PORT").and_then(|v| v.parse::<u16>().ok()) {
            opts.server.port = port;
        }
        opts
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataOptions {
    /// Directory the relative candidates below are resolved against.
    pub root: PathBuf,
    pub dataset_candidates: Vec<PathBuf>,
    pub preview_dirs: Vec<PathBuf>,
}

impl Default for DataOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            dataset_candidates: DATA_CANDIDATES.iter().map(PathBuf::from).collect(),
            preview_dirs: PREVIEW_DIRS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl DataOptions {
    pub fn resolve(&self, rel: &Path) -> PathBuf {
        if rel.is_absolute() { rel.to_path_buf() } else { self.root.join(rel) }
    }

    pub fn dataset_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.dataset_candidates.iter().map(|p| self.resolve(p))
    }

    pub fn preview_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.preview_dirs.iter().map(|p| self.resolve(p))
    }

    /// Where freshly generated previews go (first configured dir).
    pub fn preview_write_dir(&self) -> PathBuf {
        self.preview_paths()
            .next()
            .unwrap_or_else(|| self.resolve(Path::new(PREVIEW_DIRS[0])))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub base_url: String,
    pub upcoming_path: String,
    pub finished_path: String,
    pub h2h_path: String,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            base_url: s!(SOURCE_BASE),
            upcoming_path: s!(UPCOMING_PATH),
            finished_path: s!(FINISHED_PATH),
            h2h_path: s!(H2H_PATH),
        }
    }
}

impl SourceOptions {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn upcoming_url(&self) -> String { self.url(&self.upcoming_path) }
    pub fn finished_url(&self) -> String { self.url(&self.finished_path) }

    pub fn h2h_url(&self, match_id: &str) -> String {
        format!("{}{}{}", self.base_url, self.h2h_path, match_id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserOptions {
    /// Explicit binary (CHROME_BINARY). `None` → search PATH.
    pub binary: Option<PathBuf>,
    pub timeout_secs: u64,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self { binary: None, timeout_secs: BROWSER_TIMEOUT_SECS }
    }
}

impl BrowserOptions {
    pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerOptions {
    pub port: u16,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrapeLimits {
    pub upcoming: usize,
    pub finished: usize,
}

impl Default for ScrapeLimits {
    fn default() -> Self {
        Self { upcoming: REFRESH_LIMIT_UPCOMING, finished: REFRESH_LIMIT_FINISHED }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn env_overrides_defaults() {
        let opts = AppOptions::from_lookup(lookup(&[
            ("PORT", "10000"),
            ("CHROME_BINARY", "/usr/bin/chromium"),
            ("MATCH_SOURCE_URL", "https://example.test/"),
            ("PANEL_DATA_ROOT", "/srv/panel"),
        ]));
        assert_eq!(opts.server.port, 10000);
        assert_eq!(opts.browser.binary, Some(PathBuf::from("/usr/bin/chromium")));
        assert_eq!(opts.source.base_url, "https://example.test");
        assert_eq!(
            opts.data.dataset_paths().next(),
            Some(PathBuf::from("/srv/panel/data.json"))
        );
    }

    #[test]
    fn bad_or_blank_values_keep_defaults() {
        let opts = AppOptions::from_lookup(lookup(&[("PORT", "http"), ("CHROME_BINARY", "  ")]));
        assert_eq!(opts.server.port, DEFAULT_PORT);
        assert_eq!(opts.browser.binary, None);
    }

    #[test]
    fn h2h_url_appends_id() {
        let src = SourceOptions { base_url: s!("https://x.test"), ..SourceOptions::default() };
        assert_eq!(src.h2h_url("2696131"), "https://x.test/match/h2h-2696131");
    }
}
