use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static HYPHEN_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<prefix>\w)-[ \t]*\r?\n[ \t]*(?P<suffix>\w)").unwrap());

/// Normalizes extracted page text: NFKC, joins hyphenated line breaks,
/// collapses whitespace and keeps at most one blank line between blocks.
/// A whitespace run containing a tab collapses to a single tab, so cell
/// boundaries survive for the segmenter.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let de_hyphenated = HYPHEN_NEWLINE.replace_all(&normalized, "$prefix$suffix");

    let mut result = String::with_capacity(de_hyphenated.len());
    let mut prev_was_blank = false;
    let mut first_content = true;

    for line in de_hyphenated.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            prev_was_blank = true;
            continue;
        }

        if !first_content && prev_was_blank {
            result.push_str("\n\n");
        } else if !first_content {
            result.push('\n');
        }

        collapse_internal_whitespace(trimmed, &mut result);
        prev_was_blank = false;
        first_content = false;
    }

    result.trim().to_string()
}

fn collapse_internal_whitespace(line: &str, out: &mut String) {
    let mut run: Option<char> = None;

    for ch in line.chars() {
        if ch.is_whitespace() {
            run = match run {
                Some('\t') => Some('\t'),
                _ if ch == '\t' => Some('\t'),
                _ => Some(' '),
            };
        } else {
            if let Some(separator) = run.take() {
                out.push(separator);
            }
            out.push(ch);
        }
    }
}
