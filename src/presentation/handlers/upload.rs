use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::MediaType;
use crate::presentation::handlers::error::{error_response, internal_error};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub id: String,
}

#[tracing::instrument(skip(state, headers, body), fields(bytes = body.len()))]
pub async fn upload_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream");

    let Some(media_type) = MediaType::from_mime(content_type) else {
        tracing::warn!(content_type = %content_type, "Unsupported content type");
        return error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!("Unsupported content type: {}", content_type),
        );
    };

    if body.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Empty document");
    }

    match state.job_service.upload(body, media_type).await {
        Ok(id) => (
            StatusCode::OK,
            Json(UploadResponse { id: id.to_string() }),
        )
            .into_response(),
        Err(e) => internal_error(e, "Failed to store upload"),
    }
}
