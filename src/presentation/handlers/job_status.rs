use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::presentation::handlers::error::{internal_error, job_not_found, parse_job_id};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct JobStatusResponse {
    pub id: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[tracing::instrument(skip(state))]
pub async fn job_status_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Response {
    let id = match parse_job_id(&job_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.job_service.query_status(id).await {
        Ok(Some(job)) => {
            let response = JobStatusResponse {
                id: job.id.to_string(),
                state: job.state.as_str().to_string(),
                error: job.error,
                created_at: job.created_at.to_rfc3339(),
                updated_at: job.updated_at.to_rfc3339(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => job_not_found(id),
        Err(e) => internal_error(e, "Failed to fetch job status"),
    }
}
