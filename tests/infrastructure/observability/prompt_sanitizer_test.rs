use doctran::infrastructure::observability::sanitize_prompt;

#[test]
fn given_blank_prompt_when_sanitizing_then_marks_empty() {
    assert_eq!(sanitize_prompt("  \n "), "[EMPTY]");
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_on_char_boundary() {
    let prompt = "ü".repeat(150);

    let result = sanitize_prompt(&prompt);

    assert!(result.starts_with(&"ü".repeat(100)));
    assert!(result.ends_with("... (150 chars total)"));
}

#[test]
fn given_credentials_when_sanitizing_then_every_occurrence_is_redacted() {
    let prompt = "token=abc and later token=def plus Bearer xyz";

    let result = sanitize_prompt(prompt);

    assert_eq!(
        result,
        "token=[REDACTED] and later token=[REDACTED] plus Bearer [REDACTED]"
    );
}
