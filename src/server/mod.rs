// src/server/mod.rs
//! Web viewer: the same list + panel as the desktop app, served over HTTP.
//!
//! One `ViewerState` is shared by every client. Blocking work (scrape,
//! browser) runs on the blocking pool.

mod error;
mod handlers;

use std::{path::PathBuf, sync::Arc};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tokio::{net::TcpListener, sync::RwLock, task::JoinError};

use crate::{
    config::{consts::MAX_UPLOAD_BYTES, options::AppOptions},
    core::browser,
    data::Dataset,
    preview::Preview,
    store::{self, DataSource, PreviewSource},
};

pub use error::ApiError;

pub struct ViewerState {
    pub options: AppOptions,
    pub dataset: Dataset,
    pub source: DataSource,
    /// Analysis JSON posted to `/api/preview`; wins over everything else.
    pub uploaded_preview: Option<Preview>,
    /// Latest live analysis, kept even when the cache write failed.
    pub live_preview: Option<(String, Preview)>,
    /// One-shot message for the next page render.
    pub notice: Option<String>,
    pub browser: Option<PathBuf>,
}

pub type SharedState = Arc<RwLock<ViewerState>>;

impl ViewerState {
    /// Initial state: data.json from disk (or empty) and the browser lookup.
    pub fn load(options: AppOptions) -> Self {
        let (dataset, source, notice) = match store::load_dataset(&options.data, None) {
            Ok((ds, src)) => (ds, src, None),
            Err(e) => {
                loge!("Init: {e}");
                (Dataset::empty(), DataSource::Empty, Some(format!("Could not read data.json: {e}")))
            }
        };
        let browser = browser::find_browser(&options.browser);
        logf!(
            "Viewer: source={}, browser={}",
            source.label(),
            browser.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| s!("none"))
        );
        Self {
            options,
            dataset,
            source,
            uploaded_preview: None,
            live_preview: None,
            notice,
            browser,
        }
    }

    pub fn replace_dataset(&mut self, ds: Dataset, source: DataSource) {
        let (u, f) = ds.counts();
        logf!("Data: {} ({u} upcoming, {f} finished)", source.label());
        self.dataset = ds;
        self.source = source;
    }

    /// Uploaded analysis, then the live result for `id`. Never touches disk.
    pub fn held_preview(&self, id: Option<&str>) -> Option<(Preview, PreviewSource)> {
        let live = self.live_preview.as_ref().map(|(live_id, p)| (live_id.as_str(), p));
        store::held_preview(self.uploaded_preview.as_ref(), live, id)
    }
}

/// `held_preview`, then `cached_previews/<id>.json`. The file is read on the
/// blocking pool after the lock is released.
pub async fn preview_for(
    state: &SharedState,
    id: Option<&str>,
) -> Result<(Option<Preview>, PreviewSource), JoinError> {
    let data = {
        let st = state.read().await;
        if let Some((p, src)) = st.held_preview(id) {
            return Ok((Some(p), src));
        }
        st.options.data.clone()
    };
    let Some(id) = id.map(str::to_owned) else {
        return Ok((None, PreviewSource::Missing));
    };
    tokio::task::spawn_blocking(move || store::resolve_preview(&data, None, Some(id.as_str()))).await
}

pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/healthz", get(handlers::healthz))
        .route("/api/matches", get(handlers::matches))
        .route("/api/preview/:id", get(handlers::preview))
        .route("/api/dataset", post(handlers::upload_dataset))
        .route(
            "/api/preview",
            post(handlers::upload_preview).delete(handlers::clear_preview),
        )
        .route("/api/reload", post(handlers::reload))
        .route("/api/refresh", post(handlers::refresh))
        .route("/api/analyze/:id", post(handlers::analyze))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Bind `0.0.0.0:$PORT` and serve until SIGINT/SIGTERM.
pub async fn serve(options: AppOptions) -> std::io::Result<()> {
    let port = options.server.port;
    let state: SharedState = Arc::new(RwLock::new(ViewerState::load(options)));
    let app = build_router(state);

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    logf!("Listening on http://0.0.0.0:{port}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    logf!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(mut term), Ok(mut int)) => {
                tokio::select! {
                    _ = term.recv() => {}
                    _ = int.recv() => {}
                }
            }
            _ => {
                logw!("Could not register signal handlers; falling back to ctrl-c");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
