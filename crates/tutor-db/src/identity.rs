//! Identity collaborator: user id to display name.
//!
//! The resolution engine only needs display names, so it depends on this
//! trait rather than on the user store. `TutorService` implements it over the
//! `users` table; tests substitute fakes that count calls.

use std::collections::{HashMap, HashSet};

use tutor_core::enums::EntityType;

use crate::error::DatabaseError;
use crate::helpers::{WithEntity, not_found};
use crate::service::TutorService;

/// Resolve user ids to display names.
#[allow(async_fn_in_trait)]
pub trait IdentityResolver {
    /// Display name for a single user.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the user does not exist.
    async fn id_to_display_name(&self, id: &str) -> Result<String, DatabaseError>;

    /// Display names for many users in one call.
    ///
    /// The result is aligned with `ids`: element `i` is the name of `ids[i]`.
    /// Duplicate ids are allowed and yield duplicate names.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for the first id with no user.
    async fn ids_to_display_names(&self, ids: &[String]) -> Result<Vec<String>, DatabaseError>;
}

/// Re-order `names` (keyed by id, in arbitrary order) to follow `ids`.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` for the first id missing from `names`.
pub fn align_names(
    ids: &[String],
    names: &HashMap<String, String>,
) -> Result<Vec<String>, DatabaseError> {
    ids.iter()
        .map(|id| {
            names
                .get(id)
                .cloned()
                .ok_or_else(|| not_found(EntityType::User, id))
        })
        .collect()
}

impl IdentityResolver for TutorService {
    async fn id_to_display_name(&self, id: &str) -> Result<String, DatabaseError> {
        Ok(self.get_user(id).await?.username)
    }

    async fn ids_to_display_names(&self, ids: &[String]) -> Result<Vec<String>, DatabaseError> {
        let unique: Vec<&str> = ids
            .iter()
            .map(String::as_str)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        if unique.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders: Vec<String> = (1..=unique.len()).map(|i| format!("?{i}")).collect();
        let sql = format!(
            "SELECT id, username FROM users WHERE id IN ({})",
            placeholders.join(", ")
        );
        let params: Vec<libsql::Value> = unique.iter().map(|id| (*id).into()).collect();
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await
            .with_entity(EntityType::User, &unique.join(","))?;

        let mut names = HashMap::with_capacity(unique.len());
        while let Some(row) = rows.next().await? {
            names.insert(row.get::<String>(0)?, row.get::<String>(1)?);
        }
        align_names(ids, &names)
    }
}
