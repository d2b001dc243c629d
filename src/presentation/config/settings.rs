use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub llm: LlmSettings,
    pub jobs: JobSettings,
    pub logging: LoggingSettings,
    #[serde(default)]
    pub rendering: RenderingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Working directory for uploaded and translated documents.
    pub local_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    /// `openai`, `lmstudio`, `azure` or `scaffold`.
    pub provider: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: String,
    pub model: String,
    pub max_tokens: usize,
    pub temperature: f32,
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub scaffold_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobSettings {
    pub max_concurrent_jobs: usize,
    pub unit_concurrency: usize,
    pub unit_timeout_secs: u64,
    pub default_target_language: String,
    pub default_file_format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderingSettings {
    /// TrueType font embedded in PDF output. Without one, PDFs use Helvetica,
    /// which has no glyphs for non-Latin scripts.
    #[serde(default)]
    pub pdf_font_path: Option<String>,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.<environment>` (optional) and
    /// `APP_*` environment variables, e.g. `APP_SERVER__PORT=8080`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let configuration = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000_i64)?
            .set_default("server.max_upload_mb", 50_i64)?
            .set_default("storage.local_path", "temp_files")?
            .set_default("llm.provider", "openai")?
            .set_default("llm.api_key", "")?
            .set_default("llm.model", "gpt-4o-mini")?
            .set_default("llm.max_tokens", 2048_i64)?
            .set_default("llm.temperature", 0.2_f64)?
            .set_default("llm.request_timeout_secs", 120_i64)?
            .set_default("llm.scaffold_delay_ms", 0_i64)?
            .set_default("jobs.max_concurrent_jobs", 4_i64)?
            .set_default("jobs.unit_concurrency", 1_i64)?
            .set_default("jobs.unit_timeout_secs", 90_i64)?
            .set_default("jobs.default_target_language", "Chinese")?
            .set_default("jobs.default_file_format", "markdown")?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str().to_lowercase()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;
        settings.apply_scaffold_mode();
        Ok(settings)
    }

    /// `SCAFFOLD_MODE=true` swaps the backend for the offline scaffold model;
    /// `MOCK_RESPONSE_DELAY` sets its per-call delay in milliseconds.
    fn apply_scaffold_mode(&mut self) {
        let enabled = std::env::var("SCAFFOLD_MODE")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false);

        if enabled {
            self.llm.provider = "scaffold".to_string();
            if let Some(delay) = std::env::var("MOCK_RESPONSE_DELAY")
                .ok()
                .and_then(|v| v.parse().ok())
            {
                self.llm.scaffold_delay_ms = delay;
            }
        }
    }
}
