//! Ports - Repository and service interfaces
//!
//! Repository interfaces are implemented by persistence adapters and
//! consumed by the application services; the service port is implemented by
//! the application layer for its own consumers. Absence is a normal outcome
//! here: `get` returns `Option` and `delete` is idempotent.

pub mod job_batch_repository;
pub mod job_batch_service;
pub mod job_repository;

pub use job_batch_repository::JobBatchRepository;
pub use job_batch_service::JobBatchService;
pub use job_repository::JobRepository;
