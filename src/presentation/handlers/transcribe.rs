use std::io;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures::TryStreamExt;

use crate::application::services::TranscriptionPipelineError;
use crate::domain::{ArtifactKind, DEFAULT_LANGUAGE, JobId, TranscriptionOptions};
use crate::presentation::handlers::envelope::{Envelope, failure_response};
use crate::presentation::state::AppState;

/// Pipeline controller for one upload: validate the form, persist the clip
/// under a fresh job id, then hand off to the transcription service. Every
/// failure maps to the uniform envelope with a generic message while the
/// underlying cause is logged here.
#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let mut job_id: Option<JobId> = None;
    let mut language: Option<String> = None;
    let mut translate = false;
    let mut emit_subtitles = false;
    let mut speed_up = false;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart form");
                // An already-persisted upload must not outlive its request.
                if let Some(id) = job_id {
                    state.store.remove(id, ArtifactKind::RawUpload, true).await;
                }
                return failure_response(StatusCode::BAD_REQUEST, "Malformed multipart form");
            }
        };

        // Taken by value so the field itself can be consumed below.
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("file") if job_id.is_none() => {
                let id = state.store.allocate();
                let filename = field.file_name().unwrap_or("unknown").to_string();
                tracing::info!(job_id = %id, filename = %filename, "Got file upload");

                let stream =
                    Box::pin(field.map_err(|e| io::Error::new(io::ErrorKind::Other, e)));
                match state.store.persist_upload(id, stream).await {
                    Ok(bytes) => {
                        tracing::debug!(job_id = %id, bytes, "Upload stored");
                        job_id = Some(id);
                    }
                    Err(e) => {
                        tracing::error!(job_id = %id, error = %e, "Failed to persist upload");
                        return failure_response(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Error storing the uploaded file",
                        );
                    }
                }
            }
            Some("lang") => match field.text().await {
                Ok(value) if !value.is_empty() => language = Some(value),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read lang field");
                    if let Some(id) = job_id {
                        state.store.remove(id, ArtifactKind::RawUpload, true).await;
                    }
                    return failure_response(StatusCode::BAD_REQUEST, "Malformed multipart form");
                }
            },
            Some("translate") => translate = flag_value(field.text().await),
            Some("subs") => emit_subtitles = flag_value(field.text().await),
            Some("speedUp") => speed_up = flag_value(field.text().await),
            _ => {}
        }
    }

    let Some(id) = job_id else {
        tracing::warn!("Transcription request without a file field");
        return failure_response(StatusCode::BAD_REQUEST, "No file field in request");
    };

    let options = TranscriptionOptions {
        language: language.unwrap_or_else(|| {
            tracing::debug!("Defaulting language to {}", DEFAULT_LANGUAGE);
            DEFAULT_LANGUAGE.to_string()
        }),
        translate,
        emit_subtitles,
        speed_up,
    };

    match state.transcription.transcribe(id, &options).await {
        Ok(transcript) => (
            StatusCode::OK,
            Json(Envelope::success(transcript, id.to_string())),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(job_id = %id, error = %e, "Transcription pipeline failed");
            let message = match e {
                TranscriptionPipelineError::Transcode(_) => "Error while encoding to wav",
                TranscriptionPipelineError::Recognition(_) => "Error while transcribing",
            };
            failure_response(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
    }
}

/// Wire-compatibility quirk existing clients rely on: GET on the
/// transcription endpoint answers 200 with an explanatory envelope instead
/// of a 405. Other verbs get a genuine method-not-allowed from the router.
pub async fn transcribe_not_allowed() -> Response {
    (StatusCode::OK, Json(Envelope::result_only("Not allowed"))).into_response()
}

/// Absent, unreadable, or unrecognized values all mean false; form flags
/// are lenient by contract.
fn flag_value<E>(value: Result<String, E>) -> bool {
    value
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
