use std::num::NonZeroUsize;
use std::sync::Arc;

use bytes::Bytes;
use dashmap::DashMap;
use tokio::sync::Semaphore;
use tokio::task::{AbortHandle, JoinError};
use tracing::Instrument;

use crate::application::ports::{JobStore, JobStoreError, StagingStore, StagingStoreError};
use crate::domain::{Job, JobId, JobState, MediaType, StoragePath, TranslationOptions};

use super::document_pipeline::{DocumentPipeline, PipelineError, PipelineRequest};

const CANCELLED: &str = "cancelled";
const PANICKED: &str = "processing task panicked";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Ready(StoragePath),
    NotReady(JobState),
    Failed(String),
    NotFound,
}

/// Creates jobs, runs their pipelines in the background and answers status
/// and result queries. All job state lives in the [`JobStore`].
pub struct TranslationJobService {
    job_store: Arc<dyn JobStore>,
    staging_store: Arc<dyn StagingStore>,
    pipeline: Arc<DocumentPipeline>,
    workers: Arc<Semaphore>,
    running: Arc<DashMap<JobId, AbortHandle>>,
}

impl TranslationJobService {
    pub fn new(
        job_store: Arc<dyn JobStore>,
        staging_store: Arc<dyn StagingStore>,
        pipeline: Arc<DocumentPipeline>,
        max_concurrent_jobs: NonZeroUsize,
    ) -> Self {
        Self {
            job_store,
            staging_store,
            pipeline,
            workers: Arc::new(Semaphore::new(max_concurrent_jobs.get())),
            running: Arc::new(DashMap::new()),
        }
    }

    pub async fn upload(&self, data: Bytes, media_type: MediaType) -> Result<JobId, JobServiceError> {
        let job = self.job_store.create(media_type).await?;
        let size = match self.staging_store.put(&job.source, data).await {
            Ok(size) => size,
            Err(e) => {
                // The job stays `Uploaded` with no source and is never returned to the caller.
                if let Err(cleanup) = self.staging_store.delete(&job.source).await {
                    tracing::debug!(job_id = %job.id, error = %cleanup, "No partial upload to remove");
                }
                tracing::error!(job_id = %job.id, error = %e, "Failed to store upload");
                return Err(e.into());
            }
        };

        tracing::info!(
            job_id = %job.id,
            media_type = media_type.as_mime(),
            bytes = size,
            "Document uploaded"
        );
        Ok(job.id)
    }

    /// Starts background processing. Returns `false` when the job is unknown
    /// or was already started; only one caller per job ever gets `true`.
    pub async fn start_job(
        &self,
        id: JobId,
        options: TranslationOptions,
    ) -> Result<bool, JobServiceError> {
        if !self.job_store.begin_processing(id).await? {
            tracing::debug!(job_id = %id, "Start ignored: job unknown or not in uploaded state");
            return Ok(false);
        }

        let job = self
            .job_store
            .get(id)
            .await?
            .ok_or(JobServiceError::NotFound(id))?;

        self.spawn(job, options);
        Ok(true)
    }

    pub async fn query_status(&self, id: JobId) -> Result<Option<Job>, JobServiceError> {
        Ok(self.job_store.get(id).await?)
    }

    pub async fn fetch_result(&self, id: JobId) -> Result<FetchOutcome, JobServiceError> {
        let Some(job) = self.job_store.get(id).await? else {
            return Ok(FetchOutcome::NotFound);
        };

        Ok(match (job.state, job.result, job.error) {
            (JobState::Completed, Some(result), _) => FetchOutcome::Ready(result),
            (JobState::Failed, _, error) => FetchOutcome::Failed(error.unwrap_or_default()),
            (state, _, _) => FetchOutcome::NotReady(state),
        })
    }

    pub async fn read_result(&self, path: &StoragePath) -> Result<Vec<u8>, JobServiceError> {
        Ok(self.staging_store.fetch(path).await?)
    }

    /// Aborts the background work of a running job, which then ends `Failed`.
    /// Returns `false` when nothing is running for the job.
    pub async fn cancel_job(&self, id: JobId) -> Result<bool, JobServiceError> {
        if let Some((_, handle)) = self.running.remove(&id) {
            // Work that already finished settles on its own outcome.
            if handle.is_finished() {
                return Ok(false);
            }
            handle.abort();
            tracing::info!(job_id = %id, "Cancellation requested");
            return Ok(true);
        }

        match self.job_store.get(id).await? {
            Some(_) => Ok(false),
            None => Err(JobServiceError::NotFound(id)),
        }
    }

    /// Number of jobs whose background work has not settled yet.
    pub fn running_jobs(&self) -> usize {
        self.running.len()
    }

    fn spawn(&self, job: Job, options: TranslationOptions) {
        let id = job.id;
        let span = tracing::info_span!("translation_job", job_id = %id);
        let request = PipelineRequest {
            source: job.source,
            media_type: job.media_type,
            options,
            persist: true,
        };

        let pipeline = Arc::clone(&self.pipeline);
        let workers = Arc::clone(&self.workers);
        let work = tokio::spawn(
            async move {
                let _permit = workers
                    .acquire_owned()
                    .await
                    .map_err(|_| JobServiceError::WorkerPoolClosed)?;
                tracing::debug!("Worker acquired");

                let output = pipeline.process(&request).await?;
                output.output.ok_or(JobServiceError::MissingOutput)
            }
            .instrument(span.clone()),
        );
        self.running.insert(id, work.abort_handle());

        // The supervisor is never aborted, so every job gets exactly one
        // terminal transition, including when the work panics or is cancelled.
        let job_store = Arc::clone(&self.job_store);
        let running = Arc::clone(&self.running);
        tokio::spawn(
            async move {
                let outcome = work.await;
                running.remove(&id);
                settle(&*job_store, id, outcome).await;
            }
            .instrument(span),
        );
    }
}

async fn settle(
    job_store: &dyn JobStore,
    id: JobId,
    outcome: Result<Result<StoragePath, JobServiceError>, JoinError>,
) {
    let result = match outcome {
        Ok(Ok(path)) => {
            tracing::info!(result = %path, "Translation job completed");
            job_store.complete(id, path).await
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Translation job failed");
            job_store.fail(id, &e.to_string()).await
        }
        Err(e) if e.is_cancelled() => {
            tracing::warn!("Translation job cancelled");
            job_store.fail(id, CANCELLED).await
        }
        Err(e) => {
            tracing::error!(error = %e, "Translation job panicked");
            job_store.fail(id, PANICKED).await
        }
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to record terminal job state");
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JobServiceError {
    #[error("job not found: {0}")]
    NotFound(JobId),
    #[error("job store: {0}")]
    Store(#[from] JobStoreError),
    #[error("staging store: {0}")]
    Staging(#[from] StagingStoreError),
    #[error("pipeline: {0}")]
    Pipeline(#[from] PipelineError),
    #[error("worker pool closed")]
    WorkerPoolClosed,
    #[error("pipeline produced no output document")]
    MissingOutput,
}
