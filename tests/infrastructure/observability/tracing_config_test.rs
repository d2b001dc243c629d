use doctran::infrastructure::observability::TracingConfig;
use doctran::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
    assert!(config.default_filter.contains("doctran=debug"));
}

#[test]
fn given_logging_settings_when_building_config_then_level_leads_the_filter() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(Environment::Prod, &logging);

    assert!(config.json_format);
    assert_eq!(config.environment, Environment::Prod.to_string());
    assert!(config.default_filter.starts_with("warn,"));
}
