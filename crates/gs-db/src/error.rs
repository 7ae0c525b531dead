//! Database error types for gs-db.

use thiserror::Error;

/// Errors from idea store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The store could not be reached or opened.
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    /// A SQL query failed or returned data that does not fit an [`Idea`](gs_core::entities::Idea).
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
