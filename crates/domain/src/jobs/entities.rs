//! Job and JobBatch entities
//!
//! A `Job` is a unit of work owned by some principal, optionally scheduled
//! for eligibility at a later time. A `JobBatch` is a snapshot grouping of
//! jobs selected at batch-creation time; later changes to a job are not
//! retroactively reflected in batches that contain it.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared_kernel::types::{JobBatchId, JobId};

/// Current status of a job
///
/// `Unset` is the explicit zero value carried by jobs that have not been
/// given a status yet (for example entities rehydrated from a partial
/// payload); a freshly authored job starts in `Created`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    Unset,
    Created,
    Pending,
    Completed,
    Failed,
    Cancelled,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Unset => write!(f, "Unset"),
            JobStatus::Created => write!(f, "Created"),
            JobStatus::Pending => write!(f, "Pending"),
            JobStatus::Completed => write!(f, "Completed"),
            JobStatus::Failed => write!(f, "Failed"),
            JobStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// A recorded status transition on a job
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobStatusChangeEvent {
    pub previous_status: JobStatus,
    pub new_status: JobStatus,
    pub changed_at: DateTime<Utc>,
    pub description: String,
}

/// Job aggregate root
///
/// The identifier is nil until the job is first persisted; the repository
/// assigns it and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub owner_id: String,
    pub description: String,
    pub status: JobStatus,
    pub execute_after: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub status_change_events: HashSet<JobStatusChangeEvent>,
    pub parameters: HashMap<String, String>,
}

impl Job {
    /// Creates a new unpersisted job in `Created` status
    pub fn new(owner_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: JobId::nil(),
            owner_id: owner_id.into(),
            description: description.into(),
            status: JobStatus::Created,
            execute_after: None,
            created_at: Utc::now(),
            status_change_events: HashSet::new(),
            parameters: HashMap::new(),
        }
    }

    /// Schedules the job to become eligible after the given instant
    pub fn with_execute_after(mut self, execute_after: DateTime<Utc>) -> Self {
        self.execute_after = Some(execute_after);
        self
    }

    /// Attaches a named parameter, replacing any previous value for the key
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Moves the job to a new status, recording the transition as an event
    pub fn change_status(&mut self, new_status: JobStatus, description: impl Into<String>) {
        self.status_change_events.insert(JobStatusChangeEvent {
            previous_status: self.status,
            new_status,
            changed_at: Utc::now(),
            description: description.into(),
        });
        self.status = new_status;
    }

    /// The instant used to order jobs in listings: the scheduled eligibility
    /// time when present, otherwise the creation time.
    pub fn effective_time(&self) -> DateTime<Utc> {
        self.execute_after.unwrap_or(self.created_at)
    }
}

/// JobBatch aggregate root
///
/// Jobs are held by identity; adding a job whose identifier is already in
/// the batch is a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobBatch {
    pub id: JobBatchId,
    pub description: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    jobs: HashMap<JobId, Job>,
}

impl JobBatch {
    /// Creates a new unpersisted, empty batch
    pub fn new(owner_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: JobBatchId::nil(),
            description: description.into(),
            owner_id: owner_id.into(),
            created_at: Utc::now(),
            jobs: HashMap::new(),
        }
    }

    /// Adds the given jobs to the batch, skipping duplicates by identity
    pub fn with_jobs(mut self, jobs: impl IntoIterator<Item = Job>) -> Self {
        for job in jobs {
            self.jobs.entry(job.id).or_insert(job);
        }
        self
    }

    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs.values()
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn contains_job(&self, id: JobId) -> bool {
        self.jobs.contains_key(&id)
    }
}
