// src/server/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::PanelError;

/// JSON error body `{"error": "..."}` with a status.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

pub fn status_for(err: &PanelError) -> StatusCode {
    match err {
        PanelError::Json { .. } | PanelError::InvalidId(_) => StatusCode::BAD_REQUEST,
        PanelError::BrowserUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        PanelError::Http { .. }
        | PanelError::BrowserFailed { .. }
        | PanelError::BrowserTimeout { .. }
        | PanelError::EmptyPage { .. }
        | PanelError::NothingScraped => StatusCode::BAD_GATEWAY,
        PanelError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<PanelError> for ApiError {
    fn from(err: PanelError) -> Self {
        Self::new(status_for(&err), err.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        loge!("Worker task failed: {err}");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "background task failed")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            logw!("HTTP {}: {}", self.status.as_u16(), self.message);
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
