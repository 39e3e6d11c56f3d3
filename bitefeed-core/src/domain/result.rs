//! Result and error types for the core library

use thiserror::Error;

/// Error surfaced by the persistence store
///
/// The store is an external collaborator; these variants mirror the error
/// classes it reports. The ingest pipeline treats them as per-record
/// conditions (skip and log), never as batch-fatal.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unique constraint violation: {0}")]
    UniqueViolation(String),

    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("not-null constraint violation: {0}")]
    NotNullViolation(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Other(String),
}

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a provider error
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// True when the error is a benign duplicate-key conflict
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::Store(StoreError::UniqueViolation(_)))
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
