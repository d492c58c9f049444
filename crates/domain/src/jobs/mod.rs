//! Jobs Bounded Context
//!
//! Models a unit of work (`Job`) and a filter-driven grouping of jobs
//! (`JobBatch`), together with the typed search criteria used by the
//! repository listing operations.

pub mod criteria;
pub mod entities;
pub mod requests;

pub use criteria::{JobBatchSearchCriteria, JobSearchCriteria};
pub use entities::{Job, JobBatch, JobStatus, JobStatusChangeEvent};
pub use requests::CreateJobBatchRequest;
