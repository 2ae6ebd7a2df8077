//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic, the JSON sequence
//! columns and the dual datetime format (`SQLite`'s `datetime('now')` vs
//! Rust's `to_rfc3339()`).

use chrono::{DateTime, Utc};
use tutor_core::enums::EntityType;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column holding a JSON array of strings.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the column is not a JSON string array.
pub fn parse_id_list(s: &str) -> Result<Vec<String>, DatabaseError> {
    serde_json::from_str(s)
        .map_err(|e| DatabaseError::Query(format!("Invalid JSON list in column: {e}")))
}

/// Serialize a sequence of strings for a JSON TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Other` if serialization fails.
pub fn encode_id_list<S: AsRef<str>>(items: &[S]) -> Result<String, DatabaseError> {
    let items: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    serde_json::to_string(&items).map_err(|e| DatabaseError::Other(e.into()))
}

/// The error returned when a lookup by id finds no row.
#[must_use]
pub fn not_found(entity: EntityType, id: &str) -> DatabaseError {
    DatabaseError::NotFound {
        entity,
        id: id.to_string(),
    }
}

/// Attach the entity being accessed to a raw libSQL failure.
pub trait WithEntity<T> {
    /// # Errors
    ///
    /// Returns `DatabaseError::Access` carrying `entity` and `id` when `self`
    /// is an error.
    fn with_entity(self, entity: EntityType, id: &str) -> Result<T, DatabaseError>;
}

impl<T> WithEntity<T> for Result<T, libsql::Error> {
    fn with_entity(self, entity: EntityType, id: &str) -> Result<T, DatabaseError> {
        self.map_err(|source| DatabaseError::Access {
            entity,
            id: id.to_string(),
            source,
        })
    }
}
