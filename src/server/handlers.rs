// src/server/handlers.rs
use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    core::sanitize::is_safe_id,
    data::{ListTab, effective_selection, match_view},
    error::PanelError,
    preview::Preview,
    progress::LogProgress,
    render::{PageView, render_page, render_panel},
    scrape,
    store::{self, DataSource, PreviewSource},
};

use super::{ApiError, SharedState, ViewerState, preview_for};

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    tab: Option<String>,
    q: Option<String>,
    selected: Option<String>,
    preview: Option<String>,
}

fn summary(st: &ViewerState) -> Value {
    let (upcoming, finished) = st.dataset.counts();
    json!({
        "source": st.source.label(),
        "counts": { "upcoming": upcoming, "finished": finished },
    })
}

fn check_id(id: &str) -> Result<(), ApiError> {
    if is_safe_id(id) { Ok(()) } else { Err(PanelError::InvalidId(s!(id)).into()) }
}

pub async fn healthz() -> &'static str {
    "ok"
}

/// The page. An unknown `tab` falls back to the default list; `preview`
/// pins the panel and is carried through every link on the page.
pub async fn index(
    State(state): State<SharedState>,
    Query(q): Query<PageQuery>,
) -> Result<Html<String>, ApiError> {
    let tab: ListTab = q.tab.as_deref().and_then(|t| t.parse().ok()).unwrap_or_default();
    let query = q.q.unwrap_or_default();
    let pinned = q.preview.as_deref().filter(|id| !id.is_empty());

    let (has_notice, active_id) = {
        let st = state.read().await;
        let active = pinned.and_then(|id| st.dataset.find(id)).map(|m| m.id.clone());
        (st.notice.is_some(), active)
    };
    let notice = if has_notice { state.write().await.notice.take() } else { None };

    let (preview, psrc) = match active_id.as_deref() {
        Some(id) => preview_for(&state, Some(id)).await?,
        None => (None, PreviewSource::Missing),
    };
    let raw_json = preview
        .as_ref()
        .and_then(|p| serde_json::to_string_pretty(&p.raw_json()).ok());

    let st = state.read().await;
    let view = match_view(&st.dataset, tab, &query);
    let selected = effective_selection(&view, q.selected.as_deref());
    let active = active_id.as_deref().and_then(|id| st.dataset.find(id));
    let panel_html = render_panel(active, preview.as_ref(), psrc.label());
    let source_label = st.source.label();

    Ok(Html(render_page(&PageView {
        source_label: &source_label,
        counts: st.dataset.counts(),
        tab,
        query: &query,
        matches: &view,
        selected: selected.map(|m| m.id.as_str()),
        preview: pinned,
        panel_html: &panel_html,
        raw_json: raw_json.as_deref(),
        notice: notice.as_deref(),
        browser_available: st.browser.is_some(),
    })))
}

pub async fn matches(
    State(state): State<SharedState>,
    Query(q): Query<PageQuery>,
) -> Result<Json<Value>, ApiError> {
    let tab = match q.tab.as_deref().filter(|t| !t.is_empty()) {
        Some(t) => t.parse::<ListTab>().map_err(ApiError::bad_request)?,
        None => ListTab::default(),
    };
    let query = q.q.unwrap_or_default();
    let st = state.read().await;
    let view = match_view(&st.dataset, tab, &query);

    let mut body = summary(&st);
    body["tab"] = json!(tab.as_str());
    body["query"] = json!(query);
    body["total"] = json!(view.len());
    body["matches"] = Value::Array(view.iter().map(|m| m.to_raw()).collect());
    Ok(Json(body))
}

pub async fn preview(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    check_id(&id)?;
    match preview_for(&state, Some(id.as_str())).await? {
        (Some(p), _) => Ok(Json(p.raw_json())),
        (None, _) => Err(ApiError::not_found(format!("No analysis for match {id}"))),
    }
}

pub async fn upload_dataset(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let data_opts = state.read().await.options.data.clone();
    let (ds, src) = store::load_dataset(&data_opts, Some(&body[..]))?;
    let mut st = state.write().await;
    st.replace_dataset(ds, src);
    Ok(Json(summary(&st)))
}

pub async fn upload_preview(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let p = Preview::from_slice(&body, "uploaded analysis JSON")?;
    state.write().await.uploaded_preview = Some(p);
    logf!("Uploaded analysis JSON set");
    Ok(Json(json!({ "ok": true })))
}

pub async fn clear_preview(State(state): State<SharedState>) -> Json<Value> {
    state.write().await.uploaded_preview = None;
    Json(json!({ "ok": true }))
}

pub async fn reload(State(state): State<SharedState>) -> Result<Json<Value>, ApiError> {
    let data_opts = state.read().await.options.data.clone();
    let (ds, src) = store::load_dataset(&data_opts, None)?;
    let mut st = state.write().await;
    st.replace_dataset(ds, src);
    Ok(Json(summary(&st)))
}

pub async fn refresh(State(state): State<SharedState>) -> Result<Json<Value>, ApiError> {
    let (opts, bin) = {
        let st = state.read().await;
        (st.options.clone(), st.browser.clone())
    };
    let limits = opts.scrape;
    let res = tokio::task::spawn_blocking(move || {
        let mut prog = LogProgress;
        scrape::collect_matches_with(&opts, bin, limits, Some(&mut prog))
    })
    .await?;

    let mut st = state.write().await;
    match res {
        Ok(ds) => {
            st.replace_dataset(ds, DataSource::LiveScrape);
            Ok(Json(summary(&st)))
        }
        Err(e) => {
            st.notice = Some(format!("Could not refresh: {e}"));
            Err(e.into())
        }
    }
}

pub async fn analyze(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    check_id(&id)?;
    let opts = {
        let st = state.read().await;
        if st.browser.is_none() {
            return Err(PanelError::BrowserUnavailable.into());
        }
        st.options.clone()
    };

    let job_id = id.clone();
    let res = tokio::task::spawn_blocking(move || scrape::analyze_match(&opts, &job_id)).await?;

    let mut st = state.write().await;
    match res {
        Ok(p) => {
            let body = p.raw_json();
            st.uploaded_preview = None;
            st.live_preview = Some((id, p));
            Ok(Json(body))
        }
        Err(e) => {
            st.notice = Some(format!("Analysis failed: {e}"));
            Err(e.into())
        }
    }
}
