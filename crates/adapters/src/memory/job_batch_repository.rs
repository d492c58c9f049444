//! In-memory JobBatch repository
//!
//! Shares the identifier-assignment scheme of the job repository: random
//! id, atomic insert-if-absent, unbounded regeneration on collision.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use conveyor_domain::{DomainResult, JobBatch, JobBatchId, JobBatchSearchCriteria};
use conveyor_ports::JobBatchRepository;

use super::cache::Cache;

pub struct MemoryJobBatchRepository {
    job_batch_cache: Arc<dyn Cache<JobBatchId, JobBatch>>,
}

impl MemoryJobBatchRepository {
    pub fn new(job_batch_cache: Arc<dyn Cache<JobBatchId, JobBatch>>) -> Self {
        Self { job_batch_cache }
    }
}

#[async_trait]
impl JobBatchRepository for MemoryJobBatchRepository {
    async fn create_job_batch(&self, mut job_batch: JobBatch) -> DomainResult<JobBatch> {
        loop {
            let id = JobBatchId::new();
            job_batch.id = id;
            if self.job_batch_cache.try_insert(id, job_batch.clone()) {
                debug!(job_batch_id = %id, owner_id = %job_batch.owner_id, "created job batch");
                return Ok(job_batch);
            }
        }
    }

    async fn delete_job_batch(&self, id: JobBatchId) -> DomainResult<()> {
        if self.job_batch_cache.try_remove(&id) {
            debug!(job_batch_id = %id, "deleted job batch");
        }
        Ok(())
    }

    async fn get_job_batch(&self, id: JobBatchId) -> DomainResult<Option<JobBatch>> {
        Ok(self.job_batch_cache.get(&id))
    }

    async fn list_job_batches(
        &self,
        criteria: JobBatchSearchCriteria,
    ) -> DomainResult<Vec<JobBatch>> {
        let mut job_batches = self.job_batch_cache.snapshot();

        if let Some(fragment) = criteria
            .owner_id_fragment
            .as_deref()
            .filter(|fragment| !fragment.is_empty())
        {
            let needle = fragment.to_lowercase();
            job_batches.retain(|batch| batch.owner_id.to_lowercase().contains(&needle));
        }

        // Most recent batch first
        job_batches.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let skip = criteria.items_to_skip.unwrap_or(0);
        let take = criteria.maximum_items.unwrap_or(usize::MAX);
        Ok(job_batches.into_iter().skip(skip).take(take).collect())
    }

    async fn update_job_batch(&self, job_batch: JobBatch) -> DomainResult<JobBatch> {
        Ok(self.job_batch_cache.set(job_batch.id, job_batch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::cache::ConcurrentCache;
    use chrono::{Duration, TimeZone, Utc};
    use conveyor_domain::Job;
    use pretty_assertions::assert_eq;

    fn repository() -> MemoryJobBatchRepository {
        MemoryJobBatchRepository::new(Arc::new(ConcurrentCache::new()))
    }

    async fn seed_fixture(repository: &MemoryJobBatchRepository) -> Vec<JobBatch> {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let mut created = Vec::new();
        for index in 0..20usize {
            let mut batch = JobBatch::new(
                format!("owner-id-{}", index % 4 + 1),
                format!("fixture batch {index}"),
            );
            batch.created_at = base + Duration::minutes(index as i64);
            created.push(repository.create_job_batch(batch).await.unwrap());
        }
        created
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_stores_batch() {
        let repository = repository();
        let mut job = Job::new("owner-id-1", "member");
        job.id = conveyor_domain::JobId::new();
        let batch = JobBatch::new("owner-id-1", "first batch").with_jobs([job]);
        assert!(batch.id.is_nil());

        let created = repository.create_job_batch(batch).await.unwrap();
        assert!(!created.id.is_nil());
        assert_eq!(created.job_count(), 1);

        let fetched = repository.get_job_batch(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repository = repository();
        let created = repository
            .create_job_batch(JobBatch::new("owner-id-1", "short lived"))
            .await
            .unwrap();

        repository.delete_job_batch(created.id).await.unwrap();
        repository.delete_job_batch(created.id).await.unwrap();
        assert_eq!(repository.get_job_batch(created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_upserts_under_the_batch_id() {
        let repository = repository();
        let mut created = repository
            .create_job_batch(JobBatch::new("owner-id-1", "original"))
            .await
            .unwrap();

        created.description = "revised".to_string();
        let updated = repository.update_job_batch(created.clone()).await.unwrap();
        assert_eq!(updated.description, "revised");

        let fetched = repository.get_job_batch(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.description, "revised");
    }

    #[tokio::test]
    async fn test_list_filters_by_owner_fragment_case_insensitively() {
        let repository = repository();
        seed_fixture(&repository).await;

        let batches = repository
            .list_job_batches(JobBatchSearchCriteria::new().with_owner_id_fragment("Owner-Id-2"))
            .await
            .unwrap();

        assert_eq!(batches.len(), 5);
        assert!(batches.iter().all(|batch| batch.owner_id == "owner-id-2"));
    }

    #[tokio::test]
    async fn test_list_orders_most_recent_first() {
        let repository = repository();
        seed_fixture(&repository).await;

        let batches = repository
            .list_job_batches(JobBatchSearchCriteria::new())
            .await
            .unwrap();

        assert_eq!(batches.len(), 20);
        assert!(batches
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
    }

    #[tokio::test]
    async fn test_list_paginates_after_ordering() {
        let repository = repository();
        seed_fixture(&repository).await;

        let all = repository
            .list_job_batches(JobBatchSearchCriteria::new())
            .await
            .unwrap();
        let page = repository
            .list_job_batches(JobBatchSearchCriteria::new().skip(3).take(4))
            .await
            .unwrap();

        let expected: Vec<_> = all[3..7].iter().map(|batch| batch.id).collect();
        let actual: Vec<_> = page.iter().map(|batch| batch.id).collect();
        assert_eq!(actual, expected);
    }
}
