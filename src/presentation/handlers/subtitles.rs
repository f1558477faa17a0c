use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::ports::ArtifactStoreError;
use crate::domain::{ArtifactKind, JobId};
use crate::presentation::handlers::envelope::failure_response;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubtitleQuery {
    pub id: Option<String>,
}

/// Serves the SRT sidecar generated for a previous transcription job as a
/// `subtitles.srt` attachment, then removes it (honoring retention). The
/// job id is the only cross-reference between the transcription response
/// and this endpoint; anything that does not name an existing sidecar
/// fails cleanly.
#[tracing::instrument(skip(state))]
pub async fn subtitles_handler(
    State(state): State<AppState>,
    Query(query): Query<SubtitleQuery>,
) -> Response {
    let Some(raw_id) = query.id.filter(|id| !id.is_empty()) else {
        tracing::warn!("Subtitle request without an id");
        return failure_response(StatusCode::BAD_REQUEST, "Missing id parameter");
    };

    // Only well-formed job ids reach the filesystem; the id is used to
    // build a path, so arbitrary strings must not get that far.
    let Ok(id) = JobId::parse(&raw_id) else {
        tracing::warn!(id = %raw_id, "Subtitle request with malformed id");
        return failure_response(StatusCode::BAD_REQUEST, "Invalid id parameter");
    };

    let data = match state.store.fetch(id, ArtifactKind::Subtitles).await {
        Ok(data) => data,
        Err(ArtifactStoreError::NotFound(path)) => {
            tracing::warn!(job_id = %id, path = %path, "Subtitle file not found");
            return failure_response(StatusCode::NOT_FOUND, "No subtitles for this id");
        }
        Err(e) => {
            tracing::error!(job_id = %id, error = %e, "Failed to read subtitle file");
            return failure_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error reading subtitle file",
            );
        }
    };

    // The response is already determined; removal failures stay server-side.
    state.store.remove(id, ArtifactKind::Subtitles, false).await;

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/octet-stream"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"subtitles.srt\"",
            ),
        ],
        data,
    )
        .into_response()
}
