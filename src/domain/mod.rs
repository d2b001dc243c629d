mod document;
mod file_format;
mod job;
mod job_id;
mod job_state;
mod media_type;
mod storage_path;
mod translation_options;

pub use document::{
    ContentUnit, Document, Page, Table, TranslationStatus, UnitContent, UnitCounts, UnitKind,
};
pub use file_format::FileFormat;
pub use job::{Job, TransitionError};
pub use job_id::JobId;
pub use job_state::JobState;
pub use media_type::MediaType;
pub use storage_path::StoragePath;
pub use translation_options::TranslationOptions;
