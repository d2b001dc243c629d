use async_trait::async_trait;

use crate::domain::{Job, JobId, MediaType, StoragePath};

/// Single source of truth for job lifecycle state.
///
/// Implementations must make every mutating call atomic per job id: the
/// state check and the write happen under one lock, and readers never see a
/// job with a half-applied transition.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Allocates a fresh id and inserts the job in `Uploaded`.
    async fn create(&self, media_type: MediaType) -> Result<Job, JobStoreError>;

    /// `Uploaded -> Processing`. Returns `false` without side effects when the
    /// job is unknown or in any other state.
    async fn begin_processing(&self, id: JobId) -> Result<bool, JobStoreError>;

    /// `Processing -> Completed`. A no-op for jobs not in `Processing`.
    async fn complete(&self, id: JobId, result: StoragePath) -> Result<(), JobStoreError>;

    /// `Processing -> Failed`. A no-op for jobs not in `Processing`.
    async fn fail(&self, id: JobId, error: &str) -> Result<(), JobStoreError>;

    async fn get(&self, id: JobId) -> Result<Option<Job>, JobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum JobStoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}
