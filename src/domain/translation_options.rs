use std::num::NonZeroUsize;

use super::FileFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOptions {
    pub target_language: String,
    pub style: Option<String>,
    pub file_format: FileFormat,
    /// Leading pages to process; `None` processes the whole document.
    pub page_limit: Option<NonZeroUsize>,
}

impl TranslationOptions {
    pub fn new(target_language: impl Into<String>, file_format: FileFormat) -> Self {
        Self {
            target_language: target_language.into(),
            style: None,
            file_format,
            page_limit: None,
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_page_limit(mut self, page_limit: NonZeroUsize) -> Self {
        self.page_limit = Some(page_limit);
        self
    }
}
