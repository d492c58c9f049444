//! Domain Error Types
//!
//! Centralized error handling for the domain layer. Absence of an entity is
//! never an error in this model: lookups return `Option` and deletes swallow
//! missing keys. `NotFound` exists for surface layers that need to translate
//! an empty lookup into a fault of their own.

/// Result type for domain operations
pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Main domain error enum
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),
}
