//! Exercise repository: CRUD plus ordered splice/filter of question ids.

use std::collections::HashSet;

use chrono::Utc;

use tutor_core::composition::{Location, remove_ids, splice_block};
use tutor_core::entities::Exercise;
use tutor_core::enums::EntityType;
use tutor_core::ids::PREFIX_EXERCISE;

use crate::error::DatabaseError;
use crate::helpers::{WithEntity, encode_id_list, not_found, parse_datetime, parse_id_list};
use crate::service::TutorService;
use crate::updates::exercise::ExerciseUpdate;

const SELECT_COLS: &str = "id, title, questions, created_at, updated_at";

fn row_to_exercise(row: &libsql::Row) -> Result<Exercise, DatabaseError> {
    Ok(Exercise {
        id: row.get(0)?,
        title: row.get(1)?,
        questions: parse_id_list(&row.get::<String>(2)?)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
        updated_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl TutorService {
    /// Create an exercise. Question ids are not checked here; a dangling id
    /// surfaces as `NotFound` when the exercise is resolved.
    pub async fn create_exercise(
        &self,
        title: &str,
        question_ids: &[String],
    ) -> Result<Exercise, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_EXERCISE).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO exercises ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5)"),
                libsql::params![
                    id.as_str(),
                    title,
                    encode_id_list(question_ids)?,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await
            .with_entity(EntityType::Exercise, &id)?;

        Ok(Exercise {
            id,
            title: title.to_string(),
            questions: question_ids.to_vec(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_exercise(&self, id: &str) -> Result<Exercise, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM exercises WHERE id = ?1"),
                [id],
            )
            .await
            .with_entity(EntityType::Exercise, id)?;
        let row = rows
            .next()
            .await
            .with_entity(EntityType::Exercise, id)?
            .ok_or_else(|| not_found(EntityType::Exercise, id))?;
        row_to_exercise(&row)
    }

    /// Most recently updated exercises first.
    pub async fn list_exercises(&self, limit: u32) -> Result<Vec<Exercise>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM exercises ORDER BY updated_at DESC LIMIT {limit}"
                ),
                (),
            )
            .await
            .with_entity(EntityType::Exercise, "*")?;

        let mut exercises = Vec::new();
        while let Some(row) = rows.next().await.with_entity(EntityType::Exercise, "*")? {
            exercises.push(row_to_exercise(&row)?);
        }
        Ok(exercises)
    }

    /// Insert `question_ids` as one contiguous block at `location`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` when `location` is past the
    /// end of the current sequence.
    pub async fn add_questions(
        &self,
        id: &str,
        question_ids: &[String],
        location: Location,
    ) -> Result<Exercise, DatabaseError> {
        let mut exercise = self.get_exercise(id).await?;
        splice_block(&mut exercise.questions, location, question_ids.iter().cloned())?;
        self.write_questions(&mut exercise).await?;
        tracing::debug!(
            exercise = id,
            added = question_ids.len(),
            len = exercise.questions.len(),
            "added questions"
        );
        Ok(exercise)
    }

    /// Remove every occurrence of each id in `question_ids`. Survivors keep
    /// their relative order. Ids not present are ignored.
    pub async fn remove_questions(
        &self,
        id: &str,
        question_ids: &HashSet<String>,
    ) -> Result<Exercise, DatabaseError> {
        let mut exercise = self.get_exercise(id).await?;
        let removed = remove_ids(&mut exercise.questions, question_ids);
        self.write_questions(&mut exercise).await?;
        tracing::debug!(
            exercise = id,
            removed,
            len = exercise.questions.len(),
            "removed questions"
        );
        Ok(exercise)
    }

    pub async fn update_exercise(
        &self,
        id: &str,
        update: ExerciseUpdate,
    ) -> Result<Exercise, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(title) = update.title {
            sets.push(format!("title = ?{idx}"));
            params.push(title.into());
            idx += 1;
        }
        if let Some(ref questions) = update.questions {
            sets.push(format!("questions = ?{idx}"));
            params.push(encode_id_list(questions)?.into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_exercise(id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        params.push(id.into());
        let sql = format!("UPDATE exercises SET {} WHERE id = ?{idx}", sets.join(", "));
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await
            .with_entity(EntityType::Exercise, id)?;
        if changed == 0 {
            return Err(not_found(EntityType::Exercise, id));
        }

        self.get_exercise(id).await
    }

    /// Delete an exercise. Referenced questions are left in place.
    pub async fn delete_exercise(&self, id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM exercises WHERE id = ?1", [id])
            .await
            .with_entity(EntityType::Exercise, id)?;
        if changed == 0 {
            return Err(not_found(EntityType::Exercise, id));
        }
        Ok(())
    }

    /// Persist the whole question sequence and bump `updated_at`.
    async fn write_questions(&self, exercise: &mut Exercise) -> Result<(), DatabaseError> {
        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE exercises SET questions = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![
                    encode_id_list(&exercise.questions)?,
                    now.to_rfc3339(),
                    exercise.id.as_str()
                ],
            )
            .await
            .with_entity(EntityType::Exercise, &exercise.id)?;
        exercise.updated_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use crate::updates::exercise::ExerciseUpdateBuilder;
    use pretty_assertions::assert_eq;

    fn ids(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn create_exercise_roundtrip() {
        let svc = test_service().await;
        let ex = svc
            .create_exercise("Drill", &ids(&["qst-1", "qst-2"]))
            .await
            .unwrap();
        assert!(ex.id.starts_with("exr-"));

        let fetched = svc.get_exercise(&ex.id).await.unwrap();
        assert_eq!(fetched.title, "Drill");
        assert_eq!(fetched.questions, ids(&["qst-1", "qst-2"]));
    }

    #[tokio::test]
    async fn add_questions_appends_by_default() {
        let svc = test_service().await;
        let ex = svc.create_exercise("Drill", &ids(&["a"])).await.unwrap();
        let ex = svc
            .add_questions(&ex.id, &ids(&["b", "c"]), Location::default())
            .await
            .unwrap();
        assert_eq!(ex.questions, ids(&["a", "b", "c"]));
    }

    #[tokio::test]
    async fn add_questions_at_position() {
        let svc = test_service().await;
        let ex = svc.create_exercise("Drill", &ids(&["x", "y"])).await.unwrap();
        let ex = svc
            .add_questions(&ex.id, &ids(&["a", "b", "c"]), Location::At(1))
            .await
            .unwrap();
        assert_eq!(ex.questions, ids(&["x", "a", "b", "c", "y"]));

        let stored = svc.get_exercise(&ex.id).await.unwrap();
        assert_eq!(stored.questions, ex.questions);
    }

    #[tokio::test]
    async fn add_questions_out_of_range() {
        let svc = test_service().await;
        let ex = svc.create_exercise("Drill", &ids(&["x"])).await.unwrap();
        let result = svc.add_questions(&ex.id, &ids(&["a"]), Location::At(2)).await;
        assert!(matches!(result, Err(DatabaseError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn remove_questions_removes_every_occurrence() {
        let svc = test_service().await;
        let ex = svc
            .create_exercise("Drill", &ids(&["a", "b", "c", "b"]))
            .await
            .unwrap();
        let ex = svc.remove_questions(&ex.id, &set(&["b"])).await.unwrap();
        assert_eq!(ex.questions, ids(&["a", "c"]));

        let again = svc.remove_questions(&ex.id, &set(&["b"])).await.unwrap();
        assert_eq!(again.questions, ids(&["a", "c"]));
    }

    #[tokio::test]
    async fn update_replaces_sequence() {
        let svc = test_service().await;
        let ex = svc.create_exercise("Drill", &ids(&["a"])).await.unwrap();
        let update = ExerciseUpdateBuilder::new()
            .title("Review")
            .questions(ids(&["z", "y"]))
            .build();
        let ex = svc.update_exercise(&ex.id, update).await.unwrap();
        assert_eq!(ex.title, "Review");
        assert_eq!(ex.questions, ids(&["z", "y"]));
    }

    #[tokio::test]
    async fn edits_on_missing_exercise() {
        let svc = test_service().await;
        let result = svc
            .add_questions("exr-00000000", &ids(&["a"]), Location::Append)
            .await;
        assert!(matches!(
            result,
            Err(DatabaseError::NotFound { entity: EntityType::Exercise, .. })
        ));
        assert!(svc.delete_exercise("exr-00000000").await.is_err());
    }

    #[tokio::test]
    async fn list_exercises_limit() {
        let svc = test_service().await;
        for title in ["one", "two", "three"] {
            svc.create_exercise(title, &[]).await.unwrap();
        }
        assert_eq!(svc.list_exercises(2).await.unwrap().len(), 2);
        assert_eq!(svc.list_exercises(10).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn delete_leaves_questions() {
        let svc = test_service().await;
        let q = svc.create_question("?", "text", "x").await.unwrap();
        let ex = svc
            .create_exercise("Drill", std::slice::from_ref(&q.id))
            .await
            .unwrap();
        svc.delete_exercise(&ex.id).await.unwrap();
        assert!(svc.get_question(&q.id).await.is_ok());
    }

    #[tokio::test]
    async fn list_failure_names_the_entity() {
        let svc = test_service().await;
        svc.db().conn().execute("DROP TABLE exercises", ()).await.unwrap();
        assert!(matches!(
            svc.list_exercises(10).await,
            Err(DatabaseError::Access { entity: EntityType::Exercise, .. })
        ));
    }
}
