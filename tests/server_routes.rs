// tests/server_routes.rs
//
// Router behavior through `tower::ServiceExt::oneshot`; no socket involved.

mod support;

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use match_panel::{
    config::options::AppOptions,
    preview::Preview,
    server::{SharedState, ViewerState, build_router},
};
use serde_json::{Value, json};
use tokio::sync::RwLock;
use tower::ServiceExt;

use support::{options_at, sample_data, sample_preview, write_json};

fn app_with_data(dir: &std::path::Path) -> (Router, SharedState) {
    app_with_options(dir, options_at(dir))
}

fn app_with_options(dir: &std::path::Path, opts: AppOptions) -> (Router, SharedState) {
    write_json(&dir.join("data.json"), &sample_data());
    let mut st = ViewerState::load(opts);
    st.browser = None;
    let state: SharedState = Arc::new(RwLock::new(st));
    (build_router(state.clone()), state)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

async fn page(app: &Router, uri: &str) -> String {
    let (status, body) = send(app, get(uri)).await;
    assert_eq!(status, StatusCode::OK);
    String::from_utf8(body).unwrap()
}

fn cache_preview(dir: &std::path::Path, id: &str, doc: &Value) {
    write_json(&dir.join(format!("src/static/cached_previews/{id}.json")), doc);
}

#[tokio::test]
async fn healthz_and_match_list() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = app_with_data(dir.path());

    let (status, body) = send(&app, get("/healthz")).await;
    assert_eq!((status, body.as_slice()), (StatusCode::OK, b"ok".as_slice()));

    let (status, body) = send(&app, get("/api/matches?tab=upcoming&q=real")).await;
    assert_eq!(status, StatusCode::OK);
    let v = json(&body);
    assert_eq!(v["counts"]["upcoming"], 3);
    assert_eq!(v["total"], 2);
    assert_eq!(v["matches"][0]["id"], "200");

    let (status, _) = send(&app, get("/api/matches?tab=live")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn page_renders_list_and_pinned_panel() {
    let dir = tempfile::tempdir().unwrap();
    write_json(&dir.path().join("src/static/cached_previews/201.json"), &sample_preview());
    let (app, _) = app_with_data(dir.path());

    let (status, body) = send(&app, get("/?tab=upcoming&selected=201&preview=201")).await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("Showing 3 matches"));
    assert!(html.contains("Data source: Local cache"));
    assert!(!html.contains("Live analysis"));

    let (_, body) = send(&app, get("/")).await;
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("Select a match to see its analysis."));
}

#[tokio::test]
async fn preview_lookup_and_upload() {
    let dir = tempfile::tempdir().unwrap();
    let (app, state) = app_with_data(dir.path());

    let (status, body) = send(&app, get("/api/preview/201")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json(&body)["error"].as_str().unwrap().contains("201"));

    let (status, _) = send(&app, get("/api/preview/..%2Fx")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, post("/api/preview", "{ not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(state.read().await.uploaded_preview.is_none());

    let body = serde_json::to_vec(&sample_preview()).unwrap();
    let (status, _) = send(&app, post("/api/preview", body)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, get("/api/preview/201")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["final_score"], "?-?");
}

#[tokio::test]
async fn dataset_upload_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = app_with_data(dir.path());

    let upload = r#"{"finished_matches": [{"id": "1", "home_team": "A", "away_team": "B", "score": "0-0"}]}"#;
    let (status, body) = send(&app, post("/api/dataset", upload)).await;
    assert_eq!(status, StatusCode::OK);
    let v = json(&body);
    assert_eq!(v["source"], "Uploaded file");
    assert_eq!((v["counts"]["upcoming"].as_u64(), v["counts"]["finished"].as_u64()), (Some(0), Some(1)));

    let (status, _) = send(&app, post("/api/dataset", "nope")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, post("/api/reload", Body::empty())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["counts"]["upcoming"], 3);
}

#[tokio::test]
async fn analyze_without_browser_is_503() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _) = app_with_data(dir.path());

    let (status, body) = send(&app, post("/api/analyze/201", Body::empty())).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(json(&body)["error"].as_str().unwrap().contains("CHROME_BINARY"));
}

#[tokio::test]
async fn pinned_preview_survives_row_clicks_and_search() {
    let dir = tempfile::tempdir().unwrap();
    cache_preview(dir.path(), "201", &sample_preview());
    let (app, _) = app_with_data(dir.path());

    let html = page(&app, "/?tab=upcoming&selected=200&preview=201").await;
    assert!(html.contains("class=\"panel-title\">Real Sociedad vs Getafe"));
    assert!(html.contains("selected=202&amp;preview=201"));
    assert!(html.contains("href=\"/?tab=finished&amp;selected=200&amp;preview=201\""));
    assert!(html.contains("<input type=\"hidden\" name=\"preview\" value=\"201\">"));

    // searching away from the pinned row keeps the panel
    let html = page(&app, "/?tab=upcoming&q=celta&selected=200&preview=201").await;
    assert!(html.contains("Showing 1 matches"));
    assert!(html.contains("class=\"panel-title\">Real Sociedad vs Getafe"));
}

#[tokio::test]
async fn uploaded_preview_overrides_cache_until_cleared() {
    let dir = tempfile::tempdir().unwrap();
    cache_preview(dir.path(), "201", &sample_preview());
    let (app, state) = app_with_data(dir.path());

    let upload = serde_json::to_vec(&json!({"final_score": "5-5"})).unwrap();
    let (status, _) = send(&app, post("/api/preview", upload)).await;
    assert_eq!(status, StatusCode::OK);

    let html = page(&app, "/?selected=201&preview=201").await;
    assert!(html.contains("Data source: Uploaded JSON"));
    assert!(html.contains("<div class=\"score-value\">5-5</div>"));

    let req = Request::delete("/api/preview").body(Body::empty()).unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert!(state.read().await.uploaded_preview.is_none());

    let html = page(&app, "/?selected=201&preview=201").await;
    assert!(html.contains("Data source: Local cache"));
    let (_, body) = send(&app, get("/api/preview/201")).await;
    assert_eq!(json(&body)["final_score"], "?-?");
}

#[tokio::test]
async fn live_result_ranks_above_cache() {
    let dir = tempfile::tempdir().unwrap();
    cache_preview(dir.path(), "201", &sample_preview());
    let (app, state) = app_with_data(dir.path());

    // what a successful /api/analyze leaves behind
    let live = Preview::from_value(json!({"final_score": "4-0"}), "live").unwrap();
    state.write().await.live_preview = Some(("201".into(), live));

    let (_, body) = send(&app, get("/api/preview/201")).await;
    assert_eq!(json(&body)["final_score"], "4-0");
    let html = page(&app, "/?selected=201&preview=201").await;
    assert!(html.contains("Data source: Live analysis"));
    assert!(html.contains("<div class=\"score-value\">4-0</div>"));

    // other matches still read the cache
    cache_preview(dir.path(), "200", &json!({"final_score": "1-1"}));
    let (_, body) = send(&app, get("/api/preview/200")).await;
    assert_eq!(json(&body)["final_score"], "1-1");
}

#[tokio::test]
async fn blank_sections_show_empty_cards() {
    let dir = tempfile::tempdir().unwrap();
    cache_preview(
        dir.path(),
        "201",
        &json!({
            "home_standings": {},
            "away_ou_stats": {},
            "recent_indirect_full": {"last_home": {}},
            "comparativas_indirectas": {"left": {}, "right": {}}
        }),
    );
    let (app, _) = app_with_data(dir.path());

    let html = page(&app, "/?selected=201&preview=201").await;
    assert!(html.contains("No standings or over/under data"));
    assert!(html.contains("No indirect comparisons saved."));
    assert!(!html.contains("Venue:"));
    assert!(!html.contains("Position:"));
}

#[tokio::test]
async fn failed_refresh_is_502_and_leaves_a_notice() {
    let dir = tempfile::tempdir().unwrap();
    let closed = {
        let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        l.local_addr().unwrap()
    };
    let mut opts = options_at(dir.path());
    opts.source.base_url = format!("http://{closed}");
    let (app, state) = app_with_options(dir.path(), opts);

    let (status, body) = send(&app, post("/api/refresh", Body::empty())).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(json(&body)["error"].is_string());
    // the old lists stay
    assert_eq!(state.read().await.dataset.counts(), (3, 1));

    let html = page(&app, "/").await;
    assert!(html.contains("Could not refresh"));
    let html = page(&app, "/").await;
    assert!(!html.contains("Could not refresh"));
}
