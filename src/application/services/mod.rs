mod document_pipeline;
mod job_service;
mod prompt;
mod unit_translator;

pub use document_pipeline::{DocumentPipeline, PipelineError, PipelineOutput, PipelineRequest};
pub use job_service::{FetchOutcome, JobServiceError, TranslationJobService};
pub use prompt::build_prompt;
pub use unit_translator::ContentUnitTranslator;
