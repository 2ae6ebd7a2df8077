//! # tutor-db
//!
//! libSQL storage for Tutor content: the question, exercise, video and
//! lesson stores, the identity lookup backing author display names, the
//! resolution engine that hydrates lessons into nested views, and the
//! one-shot lesson-authoring flow.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) against a local file or
//! `:memory:`.

pub mod authoring;
pub mod error;
pub mod helpers;
pub mod identity;
mod migrations;
pub mod repos;
pub mod resolve;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Tutor storage.
///
/// Wraps a libSQL database and connection and provides ID generation.
pub struct TutorDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl TutorDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let tutor_db = Self { db, conn };
        tutor_db.run_migrations().await?;
        Ok(tutor_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"lsn-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT lower(hex(randomblob(4)))", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let random = row.get::<String>(0)?;
        Ok(tutor_core::ids::format_id(prefix, &random))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    async fn test_db() -> TutorDb {
        TutorDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["users", "questions", "exercises", "videos", "lessons"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("lsn").await.unwrap();
        assert!(id.starts_with("lsn-"), "ID should start with 'lsn-': {id}");
        assert_eq!(id.len(), 12, "ID should be 12 chars: {id}");
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in tutor_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn answer_type_check_constraint() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO questions (id, question, answer_type, answer) VALUES ('qst-x', '?', 'boolean', 'true')",
                (),
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn open_local_on_file_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tutor.db");
        let path = path.to_str().unwrap();
        {
            let db = TutorDb::open_local(path).await.unwrap();
            db.conn()
                .execute("INSERT INTO users (id, username) VALUES ('usr-1', 'ada')", ())
                .await
                .unwrap();
        }
        let db = TutorDb::open_local(path).await.unwrap();
        let mut rows = db
            .conn()
            .query("SELECT username FROM users WHERE id = 'usr-1'", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<String>(0).unwrap(), "ada");
    }
}
