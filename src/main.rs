use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use doctran::application::ports::{DocumentParser, DocumentWriter, JobStore, StagingStore};
use doctran::application::services::{
    ContentUnitTranslator, DocumentPipeline, TranslationJobService,
};
use doctran::domain::{FileFormat, MediaType};
use doctran::infrastructure::llm::create_translation_model;
use doctran::infrastructure::observability::{TracingConfig, init_tracing};
use doctran::infrastructure::persistence::InMemoryJobStore;
use doctran::infrastructure::rendering::{CompositeWriter, PdfDocumentWriter, TextDocumentWriter};
use doctran::infrastructure::storage::LocalStagingStore;
use doctran::infrastructure::text_processing::{CompositeParser, PdfParser, PlainTextParser};
use doctran::presentation::{AppState, Environment, Settings, TranslationDefaults, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let staging_store: Arc<dyn StagingStore> = Arc::new(
        LocalStagingStore::new(PathBuf::from(&settings.storage.local_path))
            .context("Failed to open storage directory")?,
    );
    let job_store: Arc<dyn JobStore> = Arc::new(InMemoryJobStore::new());

    let pdf_parser: Arc<dyn DocumentParser> = Arc::new(PdfParser::new());
    let text_parser: Arc<dyn DocumentParser> = Arc::new(PlainTextParser);
    let parser: Arc<dyn DocumentParser> = Arc::new(CompositeParser::new(vec![
        (MediaType::Pdf, pdf_parser),
        (MediaType::Text, text_parser),
    ]));
    let text_writer: Arc<dyn DocumentWriter> = Arc::new(TextDocumentWriter::new());
    let pdf_writer: Arc<dyn DocumentWriter> = match &settings.rendering.pdf_font_path {
        Some(path) => Arc::new(PdfDocumentWriter::with_font(
            std::fs::read(path).with_context(|| format!("Failed to read PDF font {}", path))?,
        )),
        None => Arc::new(PdfDocumentWriter::new()),
    };
    let writer: Arc<dyn DocumentWriter> = Arc::new(CompositeWriter::new(vec![
        (FileFormat::Markdown, Arc::clone(&text_writer)),
        (FileFormat::Text, text_writer),
        (FileFormat::Pdf, pdf_writer),
    ]));

    let model = create_translation_model(&settings.llm).context("Failed to create model client")?;
    let translator = ContentUnitTranslator::new(
        model,
        Duration::from_secs(settings.jobs.unit_timeout_secs),
    );

    let pipeline = Arc::new(
        DocumentPipeline::new(parser, writer, translator, Arc::clone(&staging_store))
            .with_unit_concurrency(non_zero(settings.jobs.unit_concurrency)),
    );

    let job_service = Arc::new(TranslationJobService::new(
        job_store,
        staging_store,
        pipeline,
        non_zero(settings.jobs.max_concurrent_jobs),
    ));

    let default_file_format: FileFormat = settings
        .jobs
        .default_file_format
        .parse()
        .map_err(anyhow::Error::msg)?;

    let state = AppState {
        job_service,
        defaults: TranslationDefaults {
            target_language: settings.jobs.default_target_language.clone(),
            file_format: default_file_format,
        },
        max_upload_bytes: settings.server.max_upload_mb * 1024 * 1024,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!(
        %addr,
        provider = %settings.llm.provider,
        max_concurrent_jobs = settings.jobs.max_concurrent_jobs,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn non_zero(value: usize) -> NonZeroUsize {
    NonZeroUsize::new(value).unwrap_or(NonZeroUsize::MIN)
}
