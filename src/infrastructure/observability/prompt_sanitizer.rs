const MAX_VISIBLE_CHARS: usize = 100;

const SENSITIVE_PATTERNS: [&str; 5] = ["Bearer ", "api_key=", "password=", "secret=", "token="];

/// Shortens a prompt for debug logs and redacts credentials that may have
/// ended up in document text.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total_chars)
    } else {
        trimmed.to_string()
    };

    redact(&visible)
}

fn redact(text: &str) -> String {
    let mut result = text.to_string();
    for pattern in SENSITIVE_PATTERNS {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(pattern) {
            let value_start = search_from + found + pattern.len();
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result.replace_range(value_start..value_end, "[REDACTED]");
            search_from = value_start + "[REDACTED]".len();
        }
    }
    result
}
