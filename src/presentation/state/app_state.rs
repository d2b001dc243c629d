use std::sync::Arc;

use crate::application::services::TranslationJobService;
use crate::domain::FileFormat;

/// Request defaults applied when `/translate` omits a parameter.
#[derive(Debug, Clone)]
pub struct TranslationDefaults {
    pub target_language: String,
    pub file_format: FileFormat,
}

#[derive(Clone)]
pub struct AppState {
    pub job_service: Arc<TranslationJobService>,
    pub defaults: TranslationDefaults,
    pub max_upload_bytes: usize,
}
