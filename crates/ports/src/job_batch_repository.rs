//! Job Batch Repository Port

use async_trait::async_trait;
use conveyor_domain::{DomainResult, JobBatch, JobBatchId, JobBatchSearchCriteria};

/// Repository port for the JobBatch aggregate
#[async_trait]
pub trait JobBatchRepository: Send + Sync {
    /// Persists a new batch, assigning it a fresh unique identifier.
    /// The returned batch carries the assigned identifier.
    async fn create_job_batch(&self, job_batch: JobBatch) -> DomainResult<JobBatch>;

    /// Removes a batch by identifier; removing an absent identifier is a no-op
    async fn delete_job_batch(&self, id: JobBatchId) -> DomainResult<()>;

    /// Finds a batch by identifier
    async fn get_job_batch(&self, id: JobBatchId) -> DomainResult<Option<JobBatch>>;

    /// Lists batches matching the criteria, ordered most recent first
    async fn list_job_batches(
        &self,
        criteria: JobBatchSearchCriteria,
    ) -> DomainResult<Vec<JobBatch>>;

    /// Replaces the stored batch under its identifier (upsert: also succeeds
    /// when the identifier was not previously present)
    async fn update_job_batch(&self, job_batch: JobBatch) -> DomainResult<JobBatch>;
}
