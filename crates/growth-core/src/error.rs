//! Error types for Growth core operations.
//!
//! `GrowthError` is the taxonomy callers see from the entry store.
//! `SubstrateError` is what a storage backend reports; the store maps it
//! into `GrowthError` depending on which step of an operation failed.

use thiserror::Error;

/// Result type alias for Growth operations.
pub type Result<T> = std::result::Result<T, GrowthError>;

/// Core error type for entry store operations.
#[derive(Debug, Error)]
pub enum GrowthError {
    /// The substrate could not be probed or accessed at all
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A write to the substrate failed (quota, policy, I/O)
    #[error("Failed to persist entries: {0}")]
    PersistFailed(String),

    /// An import blob was not a valid entry collection
    #[error("Failed to import entries: {0}")]
    ImportParseFailed(String),

    /// The stored collection is malformed (strict reads only)
    #[error("Stored entries are corrupt: {0}")]
    Corrupt(String),

    /// Entry data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization of the collection failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors reported by a storage substrate.
#[derive(Debug, Error)]
pub enum SubstrateError {
    /// Storage has been switched off by policy or configuration
    #[error("storage is disabled: {0}")]
    Disabled(String),

    /// The write would exceed the substrate's capacity
    #[error("storage quota exceeded ({requested} of {limit} bytes)")]
    QuotaExceeded { requested: usize, limit: usize },

    /// The key cannot be represented by this backend
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
