/// Store error taxonomy
///
/// Every hierarchy operation returns `Result<T, StoreError>`. The variants map
/// directly onto the HTTP surface: `NotFound` → 404, `Validation` → 400,
/// `Database` → 500.
///
/// `NotFound` deliberately covers both "the row does not exist" and "the row
/// exists but belongs to another user". Callers must never distinguish the
/// two, so that entity ids cannot be probed across accounts.

use thiserror::Error;

/// Result alias for hierarchy store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for scoped CRUD operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity absent, or present but not owned by the caller
    #[error("not found")]
    NotFound,

    /// A required field is missing or malformed
    #[error("validation failed: {0}")]
    Validation(String),

    /// Underlying persistence failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
