mod document_parser;
mod document_writer;
mod job_store;
mod staging_store;
mod translation_model;

pub use document_parser::{DocumentParser, ParserError};
pub use document_writer::{DocumentWriter, WriterError};
pub use job_store::{JobStore, JobStoreError};
pub use staging_store::{StagingStore, StagingStoreError};
pub use translation_model::{ModelError, ModelReply, TranslationModel};
