use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ModelError, ModelReply, TranslationModel};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::config::LlmSettings;

const SYSTEM_PROMPT: &str = "You are a professional translator. Translate faithfully and \
    preserve the structure of the input.";
const AZURE_API_VERSION: &str = "2024-06-01";

/// Chat-completions client for OpenAI-compatible backends.
pub struct OpenAiClient {
    client: Client,
    provider: String,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default, skip_serializing)]
    refusal: Option<String>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

impl OpenAiClient {
    pub fn from_settings(settings: &LlmSettings) -> Result<Self, ModelError> {
        let base_url = match settings.provider.as_str() {
            "openai" => settings
                .base_url
                .clone()
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            "lmstudio" | "azure" => settings.base_url.clone().ok_or_else(|| {
                ModelError::InvalidResponse(format!(
                    "base_url required for {} provider",
                    settings.provider
                ))
            })?,
            other => {
                return Err(ModelError::InvalidResponse(format!(
                    "unknown provider: {}",
                    other
                )));
            }
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| ModelError::ApiRequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            provider: settings.provider.clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        })
    }

    fn endpoint(&self) -> String {
        if self.provider == "azure" {
            format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                self.base_url, self.model, AZURE_API_VERSION
            )
        } else {
            format!("{}/chat/completions", self.base_url)
        }
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.provider == "azure" {
            request.header("api-key", &self.api_key)
        } else {
            request.header("Authorization", format!("Bearer {}", self.api_key))
        }
    }
}

#[async_trait]
impl TranslationModel for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<ModelReply, ModelError> {
        tracing::debug!(prompt = %sanitize_prompt(prompt), "Sending translation request");

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Some(SYSTEM_PROMPT.to_string()),
                    refusal: None,
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Some(prompt.to_string()),
                    refusal: None,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let request = self.client.post(self.endpoint()).json(&request_body);
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(|e| ModelError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ModelError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ModelError::InvalidResponse("no choices returned".to_string()))?;

        if let Some(refusal) = choice.message.refusal {
            return Ok(ModelReply::refused(refusal));
        }

        if choice.finish_reason.as_deref() == Some("content_filter") {
            return Ok(ModelReply::refused("content filtered"));
        }

        match choice.message.content {
            Some(text) if !text.trim().is_empty() => Ok(ModelReply::success(text)),
            _ => Ok(ModelReply::refused("empty completion")),
        }
    }
}
