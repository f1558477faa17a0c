use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// The uniform response body every JSON endpoint returns. Exactly one side
/// is meaningful per outcome: `message` on failure, `result` + `id` on
/// success. All three fields are always serialized.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub message: String,
    pub result: String,
    pub id: String,
}

impl Envelope {
    pub fn success(result: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            message: String::new(),
            result: result.into(),
            id: id.into(),
        }
    }

    pub fn result_only(result: impl Into<String>) -> Self {
        Self {
            message: String::new(),
            result: result.into(),
            id: String::new(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            result: String::new(),
            id: String::new(),
        }
    }
}

/// Failure responses carry only a generic message; the full diagnostic is
/// logged server-side by the caller, never sent over the wire.
pub fn failure_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(Envelope::failure(message))).into_response()
}
