//! Shared Kernel - Cross-cutting domain types
//!
//! - Error types and `DomainResult`
//! - Identifier value objects (`JobId`, `JobBatchId`)

pub mod error;
pub mod types;

pub use error::{DomainError, DomainResult};
pub use types::{JobBatchId, JobId};
