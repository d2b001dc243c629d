use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::JobServiceError;
use crate::presentation::handlers::error::{internal_error, job_not_found, parse_job_id};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct CancelResponse {
    pub cancelled: bool,
}

#[tracing::instrument(skip(state))]
pub async fn cancel_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Response {
    let id = match parse_job_id(&job_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.job_service.cancel_job(id).await {
        Ok(cancelled) => (StatusCode::OK, Json(CancelResponse { cancelled })).into_response(),
        Err(JobServiceError::NotFound(_)) => job_not_found(id),
        Err(e) => internal_error(e, "Failed to cancel job"),
    }
}
