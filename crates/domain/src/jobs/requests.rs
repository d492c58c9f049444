//! Request objects accepted by the application services

use serde::{Deserialize, Serialize};

use crate::jobs::criteria::JobSearchCriteria;

/// Request to materialize a new batch from the jobs matching a filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateJobBatchRequest {
    pub description: String,
    pub requestor: String,
    pub job_filter: JobSearchCriteria,
}

impl CreateJobBatchRequest {
    pub fn new(requestor: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            requestor: requestor.into(),
            job_filter: JobSearchCriteria::new(),
        }
    }

    pub fn with_job_filter(mut self, job_filter: JobSearchCriteria) -> Self {
        self.job_filter = job_filter;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::entities::JobStatus;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_carries_embedded_job_filter() {
        let request = CreateJobBatchRequest::new("owner-id-1", "nightly batch")
            .with_job_filter(JobSearchCriteria::new().with_statuses([JobStatus::Pending]).take(25));

        assert_eq!(request.requestor, "owner-id-1");
        assert_eq!(request.description, "nightly batch");
        assert_eq!(request.job_filter.maximum_items, Some(25));
        assert!(request.job_filter.statuses.contains(&JobStatus::Pending));
    }
}
