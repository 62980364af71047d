// src/store.rs
//! data.json and the cached preview files.

use std::{fmt, fs, path::{Path, PathBuf}};

use crate::config::options::DataOptions;
use crate::core::sanitize::is_safe_id;
use crate::data::Dataset;
use crate::error::{PanelError, Result};
use crate::preview::Preview;

/// Where the active dataset came from (shown as the header pill).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Uploaded,
    Local(PathBuf),
    Empty,
    LiveScrape,
}

impl DataSource {
    pub fn label(&self) -> String {
        match self {
            DataSource::Uploaded => s!("Uploaded file"),
            DataSource::Local(p) => format!("Local: {}", p.display()),
            DataSource::Empty => s!("Empty (no data.json)"),
            DataSource::LiveScrape => s!("Live scrape (light)"),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// First existing dataset candidate, if any.
pub fn find_dataset(opts: &DataOptions) -> Option<PathBuf> {
    opts.dataset_paths().find(|p| p.is_file())
}

/// Upload bytes win; otherwise the first data.json on disk; otherwise empty.
pub fn load_dataset(opts: &DataOptions, upload: Option<&[u8]>) -> Result<(Dataset, DataSource)> {
    if let Some(bytes) = upload {
        let ds = Dataset::from_slice(bytes, "uploaded data.json")?;
        let (u, f) = ds.counts();
        logf!("Loaded uploaded dataset: {u} upcoming, {f} finished");
        return Ok((ds, DataSource::Uploaded));
    }

    let Some(path) = find_dataset(opts) else {
        logw!("No data.json found under {}", opts.root.display());
        return Ok((Dataset::empty(), DataSource::Empty));
    };

    let ds = read_dataset(&path)?;
    let (u, f) = ds.counts();
    logf!("Loaded {}: {u} upcoming, {f} finished", path.display());
    Ok((ds, DataSource::Local(path)))
}

pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let bytes = fs::read(path).map_err(|e| PanelError::io(path, e))?;
    Dataset::from_slice(&bytes, &path.display().to_string())
}

/// Write in the data.json shape (kickoff as `time_obj`).
pub fn save_dataset(path: &Path, ds: &Dataset) -> Result<()> {
    ensure_parent(path)?;
    let text = serde_json::to_string_pretty(&ds.to_value())
        .map_err(|e| PanelError::json(path.display().to_string(), e))?;
    fs::write(path, text).map_err(|e| PanelError::io(path, e))?;
    logf!("Wrote {}", path.display());
    Ok(())
}

pub fn preview_file(dir: &Path, id: &str) -> Result<PathBuf> {
    if !is_safe_id(id) {
        return Err(PanelError::InvalidId(s!(id)));
    }
    Ok(dir.join(format!("{id}.json")))
}

/// Cached analysis for `id`: first readable `<dir>/<id>.json` wins.
/// Broken files are logged and skipped.
pub fn load_cached_preview(opts: &DataOptions, id: &str) -> Option<Preview> {
    if id.is_empty() {
        return None;
    }
    if !is_safe_id(id) {
        logw!("Refusing preview lookup for id {id:?}");
        return None;
    }
    for dir in opts.preview_paths() {
        let path = dir.join(format!("{id}.json"));
        if !path.is_file() {
            continue;
        }
        let loaded = fs::read(&path)
            .map_err(|e| PanelError::io(&path, e))
            .and_then(|bytes| Preview::from_slice(&bytes, &path.display().to_string()));
        match loaded {
            Ok(p) => {
                logd!("Preview cache hit: {}", path.display());
                return Some(p);
            }
            Err(e) => loge!("Skipping cached preview: {e}"),
        }
    }
    None
}

/// Where the analysis shown in the panel came from (panel eyebrow).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewSource {
    Uploaded,
    LocalCache,
    Live,
    Missing,
}

impl PreviewSource {
    pub fn label(self) -> &'static str {
        match self {
            PreviewSource::Uploaded => "Uploaded JSON",
            PreviewSource::LocalCache => "Local cache",
            PreviewSource::Live => "Live analysis",
            PreviewSource::Missing => "No cached analysis",
        }
    }
}

/// Previews held in memory: an upload wins, then the latest live analysis
/// when it is for `active_id`.
pub fn held_preview(
    uploaded: Option<&Preview>,
    live: Option<(&str, &Preview)>,
    active_id: Option<&str>,
) -> Option<(Preview, PreviewSource)> {
    if let Some(p) = uploaded {
        return Some((p.clone(), PreviewSource::Uploaded));
    }
    match (active_id, live) {
        (Some(id), Some((live_id, p))) if id == live_id => Some((p.clone(), PreviewSource::Live)),
        _ => None,
    }
}

/// An uploaded analysis wins over the cache; no active id means no preview.
pub fn resolve_preview(
    opts: &DataOptions,
    uploaded: Option<&Preview>,
    active_id: Option<&str>,
) -> (Option<Preview>, PreviewSource) {
    if let Some((p, src)) = held_preview(uploaded, None, active_id) {
        return (Some(p), src);
    }
    match active_id.and_then(|id| load_cached_preview(opts, id)) {
        Some(p) => (Some(p), PreviewSource::LocalCache),
        None => (None, PreviewSource::Missing),
    }
}

pub fn save_preview(dir: &Path, id: &str, preview: &Preview) -> Result<PathBuf> {
    let path = preview_file(dir, id)?;
    fs::create_dir_all(dir).map_err(|e| PanelError::io(dir, e))?;
    let text = serde_json::to_string_pretty(&preview.raw_json())
        .map_err(|e| PanelError::json(path.display().to_string(), e))?;
    fs::write(&path, text).map_err(|e| PanelError::io(&path, e))?;
    logf!("Cached preview {}", path.display());
    Ok(path)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| PanelError::io(parent, e))?;
        }
    }
    Ok(())
}
