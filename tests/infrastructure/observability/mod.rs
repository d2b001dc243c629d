mod prompt_sanitizer_test;
mod tracing_config_test;
