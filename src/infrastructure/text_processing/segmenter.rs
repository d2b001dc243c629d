use crate::domain::{ContentUnit, Page, Table};

use super::text_sanitizer::sanitize_extracted_text;

/// Splits raw page text into content units. Blocks are separated by blank
/// lines. A block of two or more rows that all carry pipe or tab separators
/// is a table; a block without any letters or digits is kept as `Other`.
/// Tabs outside tables are plain spacing.
pub fn segment_page(number: u32, raw: &str) -> Page {
    let text = sanitize_extracted_text(raw);

    let units = text
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(classify_block)
        .collect();

    Page::new(number, units)
}

fn classify_block(block: &str) -> ContentUnit {
    let lines: Vec<&str> = block.lines().collect();
    let tabular = |separator: char| lines.len() >= 2 && lines.iter().all(|l| l.contains(separator));

    if tabular('|') {
        return ContentUnit::table(Table::parse(block).rows);
    }

    if tabular('\t') {
        let rows = lines
            .iter()
            .map(|line| line.split('\t').map(|cell| cell.trim().to_string()).collect())
            .collect();
        return ContentUnit::table(rows);
    }

    let block = block.replace('\t', " ");

    if !block.chars().any(char::is_alphanumeric) {
        return ContentUnit::other(block);
    }

    ContentUnit::text(block)
}
