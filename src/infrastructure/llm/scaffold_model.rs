use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{ModelError, ModelReply, TranslationModel};

/// Offline stand-in for the real backend. Returns the prompt's content
/// prefixed with `[scaffold]`, so local runs work without credentials.
pub struct ScaffoldModel {
    delay: Duration,
}

impl ScaffoldModel {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl TranslationModel for ScaffoldModel {
    async fn complete(&self, prompt: &str) -> Result<ModelReply, ModelError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        // The unit content follows the first blank line of the prompt.
        let content = prompt
            .split_once("\n\n")
            .map(|(_, content)| content)
            .unwrap_or(prompt);

        let echoed = content
            .lines()
            .map(|line| format!("[scaffold] {}", line))
            .collect::<Vec<_>>()
            .join("\n");

        Ok(ModelReply::success(echoed))
    }
}
