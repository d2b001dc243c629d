use std::num::NonZeroUsize;

use async_trait::async_trait;

use crate::application::ports::{DocumentParser, ParserError};
use crate::domain::{Document, MediaType};

use super::segmenter::segment_page;

const PAGE_BREAK: char = '\x0C';

/// UTF-8 text, one page per form-feed separated section.
pub struct PlainTextParser;

#[async_trait]
impl DocumentParser for PlainTextParser {
    async fn parse(
        &self,
        data: &[u8],
        media_type: MediaType,
        page_limit: Option<NonZeroUsize>,
    ) -> Result<Document, ParserError> {
        if media_type != MediaType::Text {
            return Err(ParserError::UnsupportedMediaType(
                media_type.as_mime().to_string(),
            ));
        }

        let text = std::str::from_utf8(data).map_err(|e| ParserError::Malformed(e.to_string()))?;
        let limit = page_limit.map_or(usize::MAX, NonZeroUsize::get);

        let pages: Vec<_> = text
            .split(PAGE_BREAK)
            .take(limit)
            .enumerate()
            .map(|(idx, raw)| segment_page(idx as u32 + 1, raw))
            .filter(|page| !page.units.is_empty())
            .collect();

        if pages.is_empty() {
            return Err(ParserError::NoContent);
        }

        Ok(Document::new(pages))
    }
}
