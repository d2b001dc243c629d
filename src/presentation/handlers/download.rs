use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::application::services::FetchOutcome;
use crate::domain::{FileFormat, StoragePath};
use crate::presentation::handlers::error::{
    error_response, internal_error, job_not_found, parse_job_id,
};
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state))]
pub async fn download_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Response {
    let id = match parse_job_id(&job_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let path = match state.job_service.fetch_result(id).await {
        Ok(FetchOutcome::Ready(path)) => path,
        Ok(FetchOutcome::NotReady(job_state)) => {
            return error_response(
                StatusCode::CONFLICT,
                format!("Translation not ready: job is {}", job_state),
            );
        }
        Ok(FetchOutcome::Failed(_)) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, "Translation failed");
        }
        Ok(FetchOutcome::NotFound) => return job_not_found(id),
        Err(e) => return internal_error(e, "Failed to fetch job"),
    };

    match state.job_service.read_result(&path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, content_type_for(&path).to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", path.file_name()),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => internal_error(e, "Failed to read translated document"),
    }
}

fn content_type_for(path: &StoragePath) -> &'static str {
    path.as_str()
        .rsplit_once('.')
        .and_then(|(_, ext)| ext.parse::<FileFormat>().ok())
        .map_or("application/octet-stream", |format| format.as_mime())
}
