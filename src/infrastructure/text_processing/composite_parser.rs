use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{DocumentParser, ParserError};
use crate::domain::{Document, MediaType};

/// Routes each document to the parser registered for its media type.
pub struct CompositeParser {
    parsers: HashMap<MediaType, Arc<dyn DocumentParser>>,
}

impl CompositeParser {
    pub fn new(parsers: Vec<(MediaType, Arc<dyn DocumentParser>)>) -> Self {
        Self {
            parsers: parsers.into_iter().collect(),
        }
    }
}

#[async_trait]
impl DocumentParser for CompositeParser {
    async fn parse(
        &self,
        data: &[u8],
        media_type: MediaType,
        page_limit: Option<NonZeroUsize>,
    ) -> Result<Document, ParserError> {
        let parser = self.parsers.get(&media_type).ok_or_else(|| {
            ParserError::UnsupportedMediaType(media_type.as_mime().to_string())
        })?;

        parser.parse(data, media_type, page_limit).await
    }
}
