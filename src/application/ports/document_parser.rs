use std::num::NonZeroUsize;

use async_trait::async_trait;

use crate::domain::{Document, MediaType};

#[async_trait]
pub trait DocumentParser: Send + Sync {
    /// Parses `data` into pages of content units. With a `page_limit`, only
    /// the leading pages are read.
    async fn parse(
        &self,
        data: &[u8],
        media_type: MediaType,
        page_limit: Option<NonZeroUsize>,
    ) -> Result<Document, ParserError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
    #[error("malformed document: {0}")]
    Malformed(String),
    #[error("no content found in document")]
    NoContent,
}
