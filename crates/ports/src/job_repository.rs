//! Job Repository Port

use async_trait::async_trait;
use conveyor_domain::{DomainResult, Job, JobId, JobSearchCriteria};

/// Repository port for the Job aggregate
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Persists a new job, assigning it a fresh unique identifier.
    /// The returned job carries the assigned identifier.
    async fn create_job(&self, job: Job) -> DomainResult<Job>;

    /// Removes a job by identifier; removing an absent identifier is a no-op
    async fn delete_job(&self, id: JobId) -> DomainResult<()>;

    /// Finds a job by identifier
    async fn get_job(&self, id: JobId) -> DomainResult<Option<Job>>;

    /// Lists jobs matching the criteria, ordered ascending by effective
    /// time (soonest-eligible first)
    async fn list_jobs(&self, criteria: JobSearchCriteria) -> DomainResult<Vec<Job>>;

    /// Replaces the stored job under its identifier (upsert: also succeeds
    /// when the identifier was not previously present)
    async fn update_job(&self, job: Job) -> DomainResult<Job>;
}
