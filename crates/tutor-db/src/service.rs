//! Service layer hosting every store operation.
//!
//! `TutorService` wraps `TutorDb`. All repo methods are implemented as
//! `impl TutorService` blocks in [`crate::repos`], so one handle serves the
//! question, exercise, video, lesson and user stores as well as the
//! identity lookup used during resolution.

use crate::TutorDb;
use crate::error::DatabaseError;

pub struct TutorService {
    db: TutorDb,
}

impl TutorService {
    /// Create a new service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = TutorDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `TutorDb`.
    #[must_use]
    pub const fn from_db(db: TutorDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &TutorDb {
        &self.db
    }
}
