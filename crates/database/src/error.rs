//! Database error types.

use thiserror::Error;

/// Errors that can occur during database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLx error (connection, query, decode).
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;
