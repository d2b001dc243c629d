use chrono::{DateTime, Utc};

use super::{JobId, JobState, MediaType, StoragePath};

/// One document translation task and its lifecycle.
///
/// `result` is only ever set together with `Completed`, and `error` only
/// together with `Failed`. Transitions go through the methods below so the
/// pairing cannot drift.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub state: JobState,
    pub media_type: MediaType,
    pub source: StoragePath,
    pub result: Option<StoragePath>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transition from {from} to {to}")]
pub struct TransitionError {
    pub from: JobState,
    pub to: JobState,
}

impl Job {
    pub fn new(media_type: MediaType) -> Self {
        Self::with_id(JobId::new(), media_type)
    }

    pub fn with_id(id: JobId, media_type: MediaType) -> Self {
        let now = Utc::now();
        Self {
            id,
            state: JobState::Uploaded,
            media_type,
            source: StoragePath::source(&id, media_type),
            result: None,
            error: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn begin_processing(&mut self) -> Result<(), TransitionError> {
        self.transition(JobState::Uploaded, JobState::Processing)
    }

    pub fn complete(&mut self, result: StoragePath) -> Result<(), TransitionError> {
        self.transition(JobState::Processing, JobState::Completed)?;
        self.result = Some(result);
        Ok(())
    }

    pub fn fail(&mut self, error: impl Into<String>) -> Result<(), TransitionError> {
        self.transition(JobState::Processing, JobState::Failed)?;
        self.error = Some(error.into());
        Ok(())
    }

    fn transition(&mut self, from: JobState, to: JobState) -> Result<(), TransitionError> {
        if self.state != from {
            return Err(TransitionError {
                from: self.state,
                to,
            });
        }
        self.state = to;
        self.updated_at = Utc::now();
        Ok(())
    }
}
