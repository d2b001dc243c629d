use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Filter used when `RUST_LOG` is not set.
    pub default_filter: String,
}

impl TracingConfig {
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        let json_format = logging.enable_json
            || std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false);

        Self {
            environment: environment.to_string(),
            json_format,
            default_filter: format!("{},doctran=debug,tower_http=debug", logging.level),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            default_filter: "info,doctran=debug,tower_http=debug".to_string(),
        }
    }
}
