//! In-Memory Adapter
//!
//! A thread-safe key-value cache plus the repository implementations built
//! on top of it. State is process-lifetime only; nothing is persisted to
//! disk.

pub mod cache;
pub mod cache_set;
pub mod job_batch_repository;
pub mod job_repository;

pub use cache::{Cache, ConcurrentCache};
pub use cache_set::JobsCacheSet;
pub use job_batch_repository::MemoryJobBatchRepository;
pub use job_repository::MemoryJobRepository;
