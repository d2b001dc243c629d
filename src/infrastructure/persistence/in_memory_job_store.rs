use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::application::ports::{JobStore, JobStoreError};
use crate::domain::{Job, JobId, JobState, MediaType, StoragePath};

const MAX_ID_ATTEMPTS: usize = 8;

/// Process-local job store. Every transition runs while holding the entry's
/// shard lock, so check-and-set is atomic per id and readers only ever clone
/// fully applied jobs.
#[derive(Default)]
pub struct InMemoryJobStore {
    jobs: DashMap<JobId, Job>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn create(&self, media_type: MediaType) -> Result<Job, JobStoreError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let job = Job::new(media_type);
            if let Entry::Vacant(slot) = self.jobs.entry(job.id) {
                slot.insert(job.clone());
                tracing::debug!(job_id = %job.id, "Job created");
                return Ok(job);
            }
        }

        Err(JobStoreError::ConstraintViolation(
            "could not allocate a unique job id".to_string(),
        ))
    }

    async fn begin_processing(&self, id: JobId) -> Result<bool, JobStoreError> {
        let Some(mut job) = self.jobs.get_mut(&id) else {
            return Ok(false);
        };

        match job.begin_processing() {
            Ok(()) => {
                tracing::debug!(job_id = %id, state = %job.state, "Job state transition");
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }

    async fn complete(&self, id: JobId, result: StoragePath) -> Result<(), JobStoreError> {
        let mut job = self
            .jobs
            .get_mut(&id)
            .ok_or_else(|| JobStoreError::NotFound(id.to_string()))?;

        match job.complete(result) {
            Ok(()) => tracing::debug!(job_id = %id, state = %JobState::Completed, "Job state transition"),
            Err(e) => tracing::warn!(job_id = %id, error = %e, "Ignoring late completion"),
        }
        Ok(())
    }

    async fn fail(&self, id: JobId, error: &str) -> Result<(), JobStoreError> {
        let mut job = self
            .jobs
            .get_mut(&id)
            .ok_or_else(|| JobStoreError::NotFound(id.to_string()))?;

        match job.fail(error) {
            Ok(()) => tracing::debug!(job_id = %id, state = %JobState::Failed, "Job state transition"),
            Err(e) => tracing::warn!(job_id = %id, error = %e, "Ignoring late failure"),
        }
        Ok(())
    }

    async fn get(&self, id: JobId) -> Result<Option<Job>, JobStoreError> {
        Ok(self.jobs.get(&id).map(|job| job.value().clone()))
    }
}
