use std::io::Write;
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{DocumentParser, ParserError};
use crate::domain::{Document, MediaType};

use super::segmenter::segment_page;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Default)]
pub struct PdfParser;

impl PdfParser {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &Path, limit: usize) -> Result<Vec<(u32, String)>, ParserError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| ParserError::Malformed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc
            .page_count()
            .map_err(|e| ParserError::Malformed(format!("failed to read page count: {e}")))?;

        let mut pages = Vec::with_capacity(page_count.min(limit));

        for page_index in 0..page_count.min(limit) {
            let text = doc.extract_text(page_index).unwrap_or_default();
            pages.push(((page_index + 1) as u32, text));
        }

        Ok(pages)
    }
}

#[async_trait]
impl DocumentParser for PdfParser {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn parse(
        &self,
        data: &[u8],
        media_type: MediaType,
        page_limit: Option<NonZeroUsize>,
    ) -> Result<Document, ParserError> {
        if media_type != MediaType::Pdf {
            return Err(ParserError::UnsupportedMediaType(
                media_type.as_mime().to_string(),
            ));
        }

        let mut temp_file = tempfile::NamedTempFile::new()
            .map_err(|e| ParserError::Malformed(format!("failed to create temp file: {e}")))?;
        temp_file
            .write_all(data)
            .map_err(|e| ParserError::Malformed(format!("failed to write temp file: {e}")))?;

        let temp_path = temp_file.path().to_path_buf();
        let limit = page_limit.map_or(usize::MAX, NonZeroUsize::get);

        let raw_pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path, limit)),
        )
        .await
        .map_err(|_| ParserError::Malformed("PDF extraction timed out".to_string()))?
        .map_err(|e| ParserError::Malformed(format!("task join error: {e}")))??;

        let pages: Vec<_> = raw_pages
            .into_iter()
            .map(|(number, text)| segment_page(number, &text))
            .filter(|page| !page.units.is_empty())
            .collect();

        tracing::info!(page_count = pages.len(), "PDF parsed");

        if pages.is_empty() {
            return Err(ParserError::NoContent);
        }

        Ok(Document::new(pages))
    }
}
