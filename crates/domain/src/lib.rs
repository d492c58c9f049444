//! Domain Core - Jobs and Job Batches
//!
//! This crate contains the domain entities, value objects, search criteria
//! and shared error types for the job batching system. It has no I/O and no
//! async surface; persistence lives behind the repository ports.

pub mod jobs;
pub mod shared_kernel;

pub use crate::jobs::criteria::{JobBatchSearchCriteria, JobSearchCriteria};
pub use crate::jobs::entities::{Job, JobBatch, JobStatus, JobStatusChangeEvent};
pub use crate::jobs::requests::CreateJobBatchRequest;
pub use crate::shared_kernel::error::{DomainError, DomainResult};
pub use crate::shared_kernel::types::{JobBatchId, JobId};
