//! Database error types for tutor-db.

use thiserror::Error;
use tutor_core::enums::EntityType;
use tutor_core::errors::CoreError;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The referenced record does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityType, id: String },

    /// Caller-supplied input was rejected (unknown answer type, mismatched
    /// sequence lengths, out-of-range position).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The acting user is not the author of the lesson.
    #[error("{actor} is not the author of lesson {lesson_id}")]
    Unauthorized { actor: String, lesson_id: String },

    /// A storage call failed while reading or writing a specific record.
    #[error("Failed to access {entity} {id}: {source}")]
    Access {
        entity: EntityType,
        id: String,
        #[source]
        source: libsql::Error,
    },

    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<CoreError> for DatabaseError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(_)
            | CoreError::OutOfRange { .. }
            | CoreError::LengthMismatch { .. } => Self::InvalidArgument(err.to_string()),
        }
    }
}
