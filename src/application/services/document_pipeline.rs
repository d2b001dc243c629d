use std::num::NonZeroUsize;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::{self, StreamExt};

use crate::application::ports::{
    DocumentParser, DocumentWriter, ParserError, StagingStore, StagingStoreError, WriterError,
};
use crate::domain::{Document, MediaType, Page, StoragePath, TranslationOptions, UnitCounts};

use super::unit_translator::ContentUnitTranslator;

pub struct PipelineRequest {
    pub source: StoragePath,
    pub media_type: MediaType,
    pub options: TranslationOptions,
    /// Render and store the translated document next to the source.
    pub persist: bool,
}

#[derive(Debug)]
pub struct PipelineOutput {
    pub document: Document,
    pub output: Option<StoragePath>,
    pub counts: UnitCounts,
}

/// Parse, translate every unit, render. Only document-level I/O fails the
/// pipeline; unit failures stay on the units.
pub struct DocumentPipeline {
    parser: Arc<dyn DocumentParser>,
    writer: Arc<dyn DocumentWriter>,
    translator: ContentUnitTranslator,
    staging_store: Arc<dyn StagingStore>,
    unit_concurrency: NonZeroUsize,
}

impl DocumentPipeline {
    pub fn new(
        parser: Arc<dyn DocumentParser>,
        writer: Arc<dyn DocumentWriter>,
        translator: ContentUnitTranslator,
        staging_store: Arc<dyn StagingStore>,
    ) -> Self {
        Self {
            parser,
            writer,
            translator,
            staging_store,
            unit_concurrency: NonZeroUsize::MIN,
        }
    }

    /// Number of units of one page translated at once. Output order is kept
    /// regardless of this value.
    pub fn with_unit_concurrency(mut self, unit_concurrency: NonZeroUsize) -> Self {
        self.unit_concurrency = unit_concurrency;
        self
    }

    pub async fn process(&self, request: &PipelineRequest) -> Result<PipelineOutput, PipelineError> {
        let options = &request.options;

        let data = self
            .staging_store
            .fetch(&request.source)
            .await
            .map_err(PipelineError::Source)?;

        let mut document = self
            .parser
            .parse(&data, request.media_type, options.page_limit)
            .await
            .map_err(PipelineError::Parse)?;

        tracing::debug!(
            pages = document.pages.len(),
            units = document.unit_count(),
            "Document parsed"
        );

        for page in document.pages.iter_mut() {
            self.translate_page(page, &options.target_language, options.style.as_deref())
                .await;
        }

        let counts = document.counts();

        let output = if request.persist {
            Some(self.write(&document, request).await?)
        } else {
            None
        };

        tracing::info!(
            translated = counts.translated,
            failed = counts.failed,
            "Document translation finished"
        );

        Ok(PipelineOutput {
            document,
            output,
            counts,
        })
    }

    async fn translate_page(&self, page: &mut Page, target_language: &str, style: Option<&str>) {
        let units = std::mem::take(&mut page.units);
        let translator = &self.translator;

        page.units = stream::iter(units.into_iter().map(|mut unit| async move {
            translator.translate(&mut unit, target_language, style).await;
            unit
        }))
        .buffered(self.unit_concurrency.get())
        .collect()
        .await;
    }

    async fn write(
        &self,
        document: &Document,
        request: &PipelineRequest,
    ) -> Result<StoragePath, PipelineError> {
        let format = request.options.file_format;
        let rendered = self
            .writer
            .render(document, format)
            .map_err(PipelineError::Render)?;

        let output = request.source.translated(format);
        let size = self
            .staging_store
            .put(&output, Bytes::from(rendered))
            .await
            .map_err(PipelineError::Store)?;

        tracing::debug!(path = %output, bytes = size, "Translated document stored");
        Ok(output)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("source unavailable: {0}")]
    Source(StagingStoreError),
    #[error("parsing: {0}")]
    Parse(ParserError),
    #[error("rendering: {0}")]
    Render(WriterError),
    #[error("storing result: {0}")]
    Store(StagingStoreError),
}
