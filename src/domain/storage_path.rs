use std::fmt;

use super::{FileFormat, JobId, MediaType};

const TRANSLATED_SUFFIX: &str = "_translated";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    /// Key of the uploaded document for a job.
    pub fn source(job_id: &JobId, media_type: MediaType) -> Self {
        Self(format!("{}.{}", job_id.as_uuid(), media_type.extension()))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Derives the output key: the source key with its extension replaced by
    /// `_translated.<format extension>`.
    pub fn translated(&self, format: FileFormat) -> Self {
        let stem = match self.0.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.contains('/') => stem,
            _ => self.0.as_str(),
        };
        Self(format!("{}{}.{}", stem, TRANSLATED_SUFFIX, format.extension()))
    }

    /// Last path segment, used as the download filename.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
