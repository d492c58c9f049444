//! Process-wide cache composition
//!
//! The two entity caches are constructed explicitly and injected into the
//! repositories by the composition root; there is no ambient singleton.

use std::sync::Arc;

use conveyor_domain::{Job, JobBatch, JobBatchId, JobId};

use super::cache::{Cache, ConcurrentCache};

/// Owns the job and job batch caches for one process
#[derive(Clone, Default)]
pub struct JobsCacheSet {
    jobs: Arc<ConcurrentCache<JobId, Job>>,
    job_batches: Arc<ConcurrentCache<JobBatchId, JobBatch>>,
}

impl JobsCacheSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> Arc<dyn Cache<JobId, Job>> {
        self.jobs.clone()
    }

    pub fn job_batches(&self) -> Arc<dyn Cache<JobBatchId, JobBatch>> {
        self.job_batches.clone()
    }
}
