mod openai_client;
mod scaffold_model;

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{ModelError, TranslationModel};
use crate::presentation::config::LlmSettings;

pub use openai_client::OpenAiClient;
pub use scaffold_model::ScaffoldModel;

/// Builds the translation backend selected by `llm.provider`.
pub fn create_translation_model(
    settings: &LlmSettings,
) -> Result<Arc<dyn TranslationModel>, ModelError> {
    if settings.provider == "scaffold" {
        tracing::warn!("Using scaffold translation model; output is not translated");
        return Ok(Arc::new(ScaffoldModel::new(Duration::from_millis(
            settings.scaffold_delay_ms,
        ))));
    }

    Ok(Arc::new(OpenAiClient::from_settings(settings)?))
}
