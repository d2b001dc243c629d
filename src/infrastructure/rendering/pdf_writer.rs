use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use super::text_writer::page_text;
use crate::application::ports::{DocumentWriter, WriterError};
use crate::domain::{Document, FileFormat};

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 5.5;
const BODY_SIZE: f32 = 11.0;
const HEADING_SIZE: f32 = 14.0;
/// Columns per line at `BODY_SIZE`; wide (non-ASCII) characters count twice.
const LINE_COLUMNS: usize = 90;
const LAYER_NAME: &str = "text";

/// Lays translated documents out on A4 pages. Every source page starts a new
/// PDF page headed `Page N`; long pages overflow onto further PDF pages.
///
/// The built-in Helvetica only covers Latin text. Other scripts need a
/// TrueType font passed to [`PdfDocumentWriter::with_font`].
#[derive(Default)]
pub struct PdfDocumentWriter {
    font: Option<Vec<u8>>,
}

impl PdfDocumentWriter {
    pub fn new() -> Self {
        Self { font: None }
    }

    pub fn with_font(font: Vec<u8>) -> Self {
        Self { font: Some(font) }
    }

    fn load_font(&self, doc: &PdfDocumentReference) -> Result<IndirectFontRef, WriterError> {
        match &self.font {
            Some(bytes) => doc.add_external_font(bytes.as_slice()),
            None => doc.add_builtin_font(BuiltinFont::Helvetica),
        }
        .map_err(|e| WriterError::RenderFailed(format!("font: {}", e)))
    }

    fn layout(&self, document: &Document) -> Result<Vec<u8>, WriterError> {
        let (doc, first_page, first_layer) =
            PdfDocument::new("Translated document", PAGE_WIDTH, PAGE_HEIGHT, LAYER_NAME);
        let font = self.load_font(&doc)?;

        {
            let mut layer = doc.get_page(first_page).get_layer(first_layer);

            for (i, page) in document.pages.iter().enumerate() {
                if i > 0 {
                    layer = add_page(&doc);
                }

                let mut y = top();
                layer.use_text(
                    format!("Page {}", page.number),
                    HEADING_SIZE,
                    Mm(MARGIN_MM),
                    Mm(y),
                    &font,
                );
                y -= LINE_HEIGHT_MM * 2.0;

                for line in wrap_lines(&page_text(page)) {
                    if y < MARGIN_MM {
                        layer = add_page(&doc);
                        y = top();
                    }
                    if !line.is_empty() {
                        layer.use_text(line, BODY_SIZE, Mm(MARGIN_MM), Mm(y), &font);
                    }
                    y -= LINE_HEIGHT_MM;
                }
            }
        }

        doc.save_to_bytes()
            .map_err(|e| WriterError::RenderFailed(e.to_string()))
    }
}

impl DocumentWriter for PdfDocumentWriter {
    fn render(&self, document: &Document, format: FileFormat) -> Result<Vec<u8>, WriterError> {
        match format {
            FileFormat::Pdf => self.layout(document),
            other => Err(WriterError::UnsupportedFormat(other.to_string())),
        }
    }
}

fn top() -> f32 {
    PAGE_HEIGHT.0 - MARGIN_MM
}

fn add_page(doc: &PdfDocumentReference) -> PdfLayerReference {
    let (page, layer) = doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, LAYER_NAME);
    doc.get_page(page).get_layer(layer)
}

fn columns(ch: char) -> usize {
    if ch.is_ascii() { 1 } else { 2 }
}

/// Breaks text into lines of at most `LINE_COLUMNS`, at the last space when
/// there is one.
fn wrap_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();

    for source_line in text.lines() {
        let mut current = String::new();
        let mut width = 0;

        for ch in source_line.chars() {
            let w = columns(ch);
            if width + w > LINE_COLUMNS && !current.is_empty() {
                let carry = match current.rfind(' ') {
                    Some(pos) if pos > 0 => {
                        let rest = current[pos + 1..].to_string();
                        current.truncate(pos);
                        rest
                    }
                    _ => String::new(),
                };
                lines.push(std::mem::replace(&mut current, carry));
                width = current.chars().map(columns).sum();
            }
            current.push(ch);
            width += w;
        }

        lines.push(current);
    }

    lines
}
