//! Job Batch Service
//!
//! Orchestrates batch creation. Failures from the repositories are logged
//! with the request context and propagated unchanged; this service adds
//! observability, never masks or converts faults. A failed batch was never
//! observable to other callers, since the underlying insert is atomic.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use conveyor_domain::{CreateJobBatchRequest, DomainResult, JobBatch, JobSearchCriteria};
use conveyor_ports::{JobBatchRepository, JobRepository};

pub struct JobBatchService {
    job_repository: Arc<dyn JobRepository>,
    job_batch_repository: Arc<dyn JobBatchRepository>,
}

impl JobBatchService {
    pub fn new(
        job_repository: Arc<dyn JobRepository>,
        job_batch_repository: Arc<dyn JobBatchRepository>,
    ) -> Self {
        Self {
            job_repository,
            job_batch_repository,
        }
    }

    /// Queries jobs with the request's embedded filter, freezes the result
    /// into a new batch owned by the requestor and persists it.
    pub async fn create_job_batch(
        &self,
        request: CreateJobBatchRequest,
    ) -> DomainResult<JobBatch> {
        let CreateJobBatchRequest {
            description,
            requestor,
            job_filter,
        } = request;
        let requested_maximum = job_filter.maximum_items;

        info!(
            %requestor,
            %description,
            ?requested_maximum,
            "creating job batch"
        );

        match self.assemble_batch(&requestor, &description, job_filter).await {
            Ok(job_batch) => {
                info!(
                    owner_id = %job_batch.owner_id,
                    description = %job_batch.description,
                    job_count = job_batch.job_count(),
                    "created job batch"
                );
                Ok(job_batch)
            }
            Err(error) => {
                error!(
                    %requestor,
                    %description,
                    ?requested_maximum,
                    %error,
                    "failed to create job batch"
                );
                Err(error)
            }
        }
    }

    async fn assemble_batch(
        &self,
        requestor: &str,
        description: &str,
        job_filter: JobSearchCriteria,
    ) -> DomainResult<JobBatch> {
        let jobs = self.job_repository.list_jobs(job_filter).await?;
        let job_batch = JobBatch::new(requestor, description).with_jobs(jobs);
        self.job_batch_repository.create_job_batch(job_batch).await
    }
}

#[async_trait]
impl conveyor_ports::JobBatchService for JobBatchService {
    async fn create_job_batch(&self, request: CreateJobBatchRequest) -> DomainResult<JobBatch> {
        JobBatchService::create_job_batch(self, request).await
    }
}
