//! Search criteria for repository listings
//!
//! Criteria are plain data carried from the caller to a repository `list`
//! operation. All filters are conjunctive; pagination is applied after
//! filtering and ordering, skip strictly before take.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::jobs::entities::JobStatus;

/// Filter, ordering and pagination request for job listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSearchCriteria {
    /// Case-insensitive substring matched against the job owner id
    pub owner_id_fragment: Option<String>,
    /// Statuses to include; an empty set applies no status filter
    pub statuses: HashSet<JobStatus>,
    /// On-or-before marker: only jobs whose `execute_after` is at or before
    /// this instant pass. Jobs without an `execute_after` always pass.
    pub execute_after: Option<DateTime<Utc>>,
    pub items_to_skip: Option<usize>,
    pub maximum_items: Option<usize>,
}

impl JobSearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_owner_id_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.owner_id_fragment = Some(fragment.into());
        self
    }

    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = JobStatus>) -> Self {
        self.statuses.extend(statuses);
        self
    }

    pub fn with_execute_after(mut self, marker: DateTime<Utc>) -> Self {
        self.execute_after = Some(marker);
        self
    }

    pub fn skip(mut self, items: usize) -> Self {
        self.items_to_skip = Some(items);
        self
    }

    pub fn take(mut self, items: usize) -> Self {
        self.maximum_items = Some(items);
        self
    }
}

/// Filter and pagination request for job batch listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobBatchSearchCriteria {
    /// Case-insensitive substring matched against the batch owner id
    pub owner_id_fragment: Option<String>,
    pub items_to_skip: Option<usize>,
    pub maximum_items: Option<usize>,
}

impl JobBatchSearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_owner_id_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.owner_id_fragment = Some(fragment.into());
        self
    }

    pub fn skip(mut self, items: usize) -> Self {
        self.items_to_skip = Some(items);
        self
    }

    pub fn take(mut self, items: usize) -> Self {
        self.maximum_items = Some(items);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_criteria_apply_no_filters() {
        let criteria = JobSearchCriteria::new();

        assert!(criteria.owner_id_fragment.is_none());
        assert!(criteria.statuses.is_empty());
        assert!(criteria.execute_after.is_none());
        assert!(criteria.items_to_skip.is_none());
        assert!(criteria.maximum_items.is_none());
    }

    #[test]
    fn test_with_statuses_accumulates_across_calls() {
        let criteria = JobSearchCriteria::new()
            .with_statuses([JobStatus::Completed, JobStatus::Failed])
            .with_statuses([JobStatus::Failed, JobStatus::Cancelled]);

        assert_eq!(criteria.statuses.len(), 3);
        assert!(criteria.statuses.contains(&JobStatus::Completed));
        assert!(criteria.statuses.contains(&JobStatus::Cancelled));
    }

    #[test]
    fn test_builders_set_pagination_bounds() {
        let criteria = JobBatchSearchCriteria::new()
            .with_owner_id_fragment("owner-id-2")
            .skip(10)
            .take(5);

        assert_eq!(criteria.owner_id_fragment.as_deref(), Some("owner-id-2"));
        assert_eq!(criteria.items_to_skip, Some(10));
        assert_eq!(criteria.maximum_items, Some(5));
    }
}
