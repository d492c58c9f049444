//! Job Batch Service Port

use async_trait::async_trait;
use conveyor_domain::{CreateJobBatchRequest, DomainResult, JobBatch};

/// Service port for batch orchestration
///
/// Consumed by surface layers that want to trigger batch creation without
/// depending on the application crate's concrete service.
#[async_trait]
pub trait JobBatchService: Send + Sync {
    /// Materializes a new batch from the jobs matching the request's
    /// embedded filter and persists it
    async fn create_job_batch(&self, request: CreateJobBatchRequest) -> DomainResult<JobBatch>;
}
