//! Local store error types

use thiserror::Error;

/// Errors raised by [`LocalStore`](super::LocalStore)
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// SQLite rejected a statement
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Stored value could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Lock acquisition failed
    #[error("Lock error: {0}")]
    Lock(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for StoreError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        StoreError::Lock(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
