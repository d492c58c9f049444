//! In-memory Job repository
//!
//! Identifier assignment happens here: `create_job` generates a random id
//! and commits it with an atomic insert-if-absent, regenerating on
//! collision. The retry loop is deliberately unbounded; with a 128-bit key
//! space a collision is a correctness safety net, not a throughput concern,
//! and capping it would introduce a spurious failure mode.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use conveyor_domain::{DomainResult, Job, JobId, JobSearchCriteria};
use conveyor_ports::JobRepository;

use super::cache::Cache;

pub struct MemoryJobRepository {
    job_cache: Arc<dyn Cache<JobId, Job>>,
}

impl MemoryJobRepository {
    pub fn new(job_cache: Arc<dyn Cache<JobId, Job>>) -> Self {
        Self { job_cache }
    }
}

#[async_trait]
impl JobRepository for MemoryJobRepository {
    async fn create_job(&self, mut job: Job) -> DomainResult<Job> {
        loop {
            let id = JobId::new();
            job.id = id;
            if self.job_cache.try_insert(id, job.clone()) {
                debug!(job_id = %id, owner_id = %job.owner_id, "created job");
                return Ok(job);
            }
        }
    }

    async fn delete_job(&self, id: JobId) -> DomainResult<()> {
        // Absence is swallowed: delete is idempotent
        if self.job_cache.try_remove(&id) {
            debug!(job_id = %id, "deleted job");
        }
        Ok(())
    }

    async fn get_job(&self, id: JobId) -> DomainResult<Option<Job>> {
        Ok(self.job_cache.get(&id))
    }

    async fn list_jobs(&self, criteria: JobSearchCriteria) -> DomainResult<Vec<Job>> {
        let mut jobs = self.job_cache.snapshot();

        if let Some(fragment) = criteria
            .owner_id_fragment
            .as_deref()
            .filter(|fragment| !fragment.is_empty())
        {
            let needle = fragment.to_lowercase();
            jobs.retain(|job| job.owner_id.to_lowercase().contains(&needle));
        }

        if !criteria.statuses.is_empty() {
            jobs.retain(|job| criteria.statuses.contains(&job.status));
        }

        if let Some(marker) = criteria.execute_after {
            // A job without an execute-after time always satisfies the marker
            jobs.retain(|job| job.execute_after.map_or(true, |at| at <= marker));
        }

        jobs.sort_by_key(Job::effective_time);

        let skip = criteria.items_to_skip.unwrap_or(0);
        let take = criteria.maximum_items.unwrap_or(usize::MAX);
        Ok(jobs.into_iter().skip(skip).take(take).collect())
    }

    async fn update_job(&self, job: Job) -> DomainResult<Job> {
        Ok(self.job_cache.set(job.id, job))
    }
}
