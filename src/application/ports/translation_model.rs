use async_trait::async_trait;

/// Backend that turns a prompt into translated text.
#[async_trait]
pub trait TranslationModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<ModelReply, ModelError>;
}

/// A refusal is a reply with `success == false`, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelReply {
    pub text: String,
    pub success: bool,
}

impl ModelReply {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }

    pub fn refused(reason: impl Into<String>) -> Self {
        Self {
            text: reason.into(),
            success: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
