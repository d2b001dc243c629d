use std::fmt::Write;

use crate::application::ports::{DocumentWriter, WriterError};
use crate::domain::{Document, FileFormat, Page, Table, UnitContent};

const PAGE_BREAK: char = '\x0C';

/// Renders translated documents as Markdown or plain text. Units whose
/// translation failed are written with their original content.
#[derive(Default)]
pub struct TextDocumentWriter;

impl TextDocumentWriter {
    pub fn new() -> Self {
        Self
    }

    fn markdown(document: &Document) -> Result<String, std::fmt::Error> {
        let mut out = String::new();

        for (i, page) in document.pages.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            writeln!(out, "## Page {}\n", page.number)?;

            for unit in &page.units {
                match unit.effective() {
                    UnitContent::Table(table) => write_markdown_table(&mut out, table)?,
                    UnitContent::Text(text) => writeln!(out, "{}", text)?,
                    UnitContent::Other(content) => writeln!(out, "{}", content)?,
                }
                out.push('\n');
            }
        }

        Ok(out)
    }

    fn plain(document: &Document) -> String {
        document
            .pages
            .iter()
            .map(page_text)
            .collect::<Vec<_>>()
            .join(&format!("\n{}", PAGE_BREAK))
    }
}

pub(super) fn page_text(page: &Page) -> String {
    page.units
        .iter()
        .map(|unit| unit.effective().to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn write_markdown_table(out: &mut String, table: &Table) -> std::fmt::Result {
    let columns = table.column_count();
    if columns == 0 {
        return Ok(());
    }

    for (i, row) in table.rows.iter().enumerate() {
        let mut cells: Vec<&str> = row.iter().map(|c| c.as_str()).collect();
        cells.resize(columns, "");
        writeln!(out, "| {} |", cells.join(" | "))?;

        if i == 0 {
            writeln!(out, "|{}", " --- |".repeat(columns))?;
        }
    }

    Ok(())
}

impl DocumentWriter for TextDocumentWriter {
    fn render(&self, document: &Document, format: FileFormat) -> Result<Vec<u8>, WriterError> {
        let rendered = match format {
            FileFormat::Markdown => {
                Self::markdown(document).map_err(|e| WriterError::RenderFailed(e.to_string()))?
            }
            FileFormat::Text => Self::plain(document),
            FileFormat::Pdf => return Err(WriterError::UnsupportedFormat(format.to_string())),
        };

        Ok(rendered.into_bytes())
    }
}
