use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub model: String,
    pub version: String,
}

/// Liveness/info probe.
pub async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(StatusResponse {
            status: "ok".to_string(),
            model: state.settings.whisper.model.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}
