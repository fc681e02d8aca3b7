//! Database error types for pravo-db.

use thiserror::Error;

/// Errors from incident store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned data of the wrong shape.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema initialization failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
