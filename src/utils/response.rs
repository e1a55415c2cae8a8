use axum::{extract::Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// The error body shared by every endpoint: `{ "status": 400, "message": "..." }`.
pub fn error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        Json(json!({
            "status": status.as_u16(),
            "message": message.into(),
        })),
    )
        .into_response()
}
