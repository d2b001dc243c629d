use std::num::NonZeroUsize;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::{FileFormat, TranslationOptions};
use crate::presentation::handlers::error::{
    error_response, internal_error, job_not_found, parse_job_id,
};
use crate::presentation::state::{AppState, TranslationDefaults};

#[derive(Debug, Deserialize)]
pub struct TranslateQuery {
    #[serde(default, alias = "targetLanguage")]
    pub target_language: Option<String>,
    #[serde(default, alias = "fileFormat")]
    pub file_format: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub pages: Option<usize>,
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub started: bool,
}

impl TranslateQuery {
    fn into_options(self, defaults: &TranslationDefaults) -> Result<TranslationOptions, String> {
        let target_language = self
            .target_language
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| defaults.target_language.clone());

        let file_format = match self.file_format {
            Some(raw) => raw.parse::<FileFormat>()?,
            None => defaults.file_format,
        };

        let page_limit = match self.pages {
            Some(pages) => Some(
                NonZeroUsize::new(pages).ok_or_else(|| "pages must be a positive integer".to_string())?,
            ),
            None => None,
        };

        Ok(TranslationOptions {
            target_language,
            style: self.style.filter(|s| !s.trim().is_empty()),
            file_format,
            page_limit,
        })
    }
}

#[tracing::instrument(skip(state))]
pub async fn translate_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    query: Result<Query<TranslateQuery>, QueryRejection>,
) -> Response {
    let id = match parse_job_id(&job_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    let options = match query.into_options(&state.defaults) {
        Ok(options) => options,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    match state.job_service.start_job(id, options).await {
        Ok(true) => {
            tracing::info!(job_id = %id, "Translation started");
            (StatusCode::ACCEPTED, Json(TranslateResponse { started: true })).into_response()
        }
        Ok(false) => match state.job_service.query_status(id).await {
            Ok(Some(_)) => {
                (StatusCode::CONFLICT, Json(TranslateResponse { started: false })).into_response()
            }
            Ok(None) => job_not_found(id),
            Err(e) => internal_error(e, "Failed to fetch job"),
        },
        Err(e) => internal_error(e, "Failed to start translation"),
    }
}
