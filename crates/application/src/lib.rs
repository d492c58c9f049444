//! Application Services
//!
//! Orchestration over the repository ports. The only service today is the
//! batch-creation flow: read a filtered set of jobs, freeze them into a new
//! batch, persist it.

pub mod job_batch_service;

pub use job_batch_service::JobBatchService;
