use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::JobId;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

pub fn internal_error(error: impl std::fmt::Display, context: &str) -> Response {
    tracing::error!(error = %error, "{}", context);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, context)
}

pub fn parse_job_id(raw: &str) -> Result<JobId, Response> {
    raw.trim()
        .parse()
        .map_err(|_| error_response(StatusCode::BAD_REQUEST, format!("Invalid job ID: {}", raw)))
}

pub fn job_not_found(id: JobId) -> Response {
    error_response(StatusCode::NOT_FOUND, format!("Job not found: {}", id))
}
