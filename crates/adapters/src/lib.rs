//! Persistence Adapters
//!
//! Implementations of the repository ports. Only the in-memory adapter
//! lives here today; it backs both repositories with a process-wide
//! concurrent cache.

pub mod memory;

pub use memory::{
    Cache, ConcurrentCache, JobsCacheSet, MemoryJobBatchRepository, MemoryJobRepository,
};
