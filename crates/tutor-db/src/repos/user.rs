//! User repository. Backs author display names; no profile management.

use chrono::Utc;

use tutor_core::entities::User;
use tutor_core::enums::EntityType;
use tutor_core::ids::PREFIX_USER;

use crate::error::DatabaseError;
use crate::helpers::{WithEntity, not_found, parse_datetime};
use crate::service::TutorService;

const SELECT_COLS: &str = "id, username, created_at, updated_at";

pub(crate) fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
        updated_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl TutorService {
    /// Register a user.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` if the username is empty or
    /// already taken.
    pub async fn create_user(&self, username: &str) -> Result<User, DatabaseError> {
        if username.trim().is_empty() {
            return Err(DatabaseError::InvalidArgument(
                "username must not be empty".into(),
            ));
        }

        let mut rows = self
            .db()
            .conn()
            .query("SELECT 1 FROM users WHERE username = ?1", [username])
            .await?;
        if rows.next().await?.is_some() {
            return Err(DatabaseError::InvalidArgument(format!(
                "username '{username}' is already taken"
            )));
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_USER).await?;
        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO users ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4)"),
                libsql::params![id.as_str(), username, now.to_rfc3339(), now.to_rfc3339()],
            )
            .await
            .with_entity(EntityType::User, &id)?;

        Ok(User {
            id,
            username: username.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_user(&self, id: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1"), [id])
            .await
            .with_entity(EntityType::User, id)?;
        let row = rows
            .next()
            .await
            .with_entity(EntityType::User, id)?
            .ok_or_else(|| not_found(EntityType::User, id))?;
        row_to_user(&row)
    }

    /// Look a user up by their unique username.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` (keyed by the username) if no user
    /// has it.
    pub async fn get_user_by_username(&self, username: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM users WHERE username = ?1"),
                [username],
            )
            .await
            .with_entity(EntityType::User, username)?;
        let row = rows
            .next()
            .await
            .with_entity(EntityType::User, username)?
            .ok_or_else(|| not_found(EntityType::User, username))?;
        row_to_user(&row)
    }
}
