use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::TranslationModel;
use crate::domain::ContentUnit;

use super::prompt::build_prompt;

/// Translates single content units. Every backend problem is recorded on the
/// unit as a failure; nothing here is fatal to the document.
pub struct ContentUnitTranslator {
    model: Arc<dyn TranslationModel>,
    request_timeout: Duration,
}

impl ContentUnitTranslator {
    pub fn new(model: Arc<dyn TranslationModel>, request_timeout: Duration) -> Self {
        Self {
            model,
            request_timeout,
        }
    }

    /// Returns the translated text and whether the backend succeeded. On
    /// failure the text is the original content.
    pub async fn translate(
        &self,
        unit: &mut ContentUnit,
        target_language: &str,
        style: Option<&str>,
    ) -> (String, bool) {
        let prompt = build_prompt(unit, target_language, style);

        let outcome = tokio::time::timeout(self.request_timeout, self.model.complete(&prompt)).await;

        let failure = match outcome {
            Ok(Ok(reply)) if reply.success && !reply.text.trim().is_empty() => {
                unit.apply_translation(&reply.text, true);
                if !unit.is_failed() {
                    return (reply.text, true);
                }
                tracing::warn!(kind = ?unit.kind(), "Reply did not fit the unit layout");
                return (unit.original.to_string(), false);
            }
            Ok(Ok(reply)) if reply.success => "empty reply".to_string(),
            Ok(Ok(reply)) => format!("refused: {}", reply.text),
            Ok(Err(e)) => e.to_string(),
            Err(_) => format!(
                "timed out after {}s",
                self.request_timeout.as_secs_f32()
            ),
        };

        tracing::warn!(kind = ?unit.kind(), reason = %failure, "Unit translation failed");
        unit.apply_translation(&failure, false);
        (unit.original.to_string(), false)
    }
}
