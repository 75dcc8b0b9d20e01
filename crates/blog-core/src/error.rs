//! Persistence-level error types.

use thiserror::Error;

/// Errors raised by a post repository.
///
/// Callers outside the storage layer treat every variant the same way; the
/// variants only exist so the failure can be logged with some context.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Post not found: {id}")]
    NotFound { id: String },

    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}

impl PersistenceError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}
