//! Lesson repository: CRUD, authorship checks and the structural edits on the
//! sub-lesson sequence.
//!
//! Every mutation takes the acting user id and refuses with
//! `DatabaseError::Unauthorized` unless that user authored the lesson. Edits
//! load the lesson, change the in-memory sequence and write both stored
//! columns back in full. There is no concurrency token, so the last write of
//! a lesson wins.

use std::collections::HashSet;

use chrono::Utc;

use tutor_core::composition::{Location, SubLesson, SubLessons};
use tutor_core::entities::Lesson;
use tutor_core::enums::EntityType;
use tutor_core::ids::PREFIX_LESSON;

use crate::error::DatabaseError;
use crate::helpers::{WithEntity, encode_id_list, not_found, parse_datetime, parse_id_list};
use crate::service::TutorService;
use crate::updates::lesson::LessonUpdate;

const SELECT_COLS: &str =
    "id, author, title, sub_lesson_ids, sub_lesson_types, created_at, updated_at";

fn row_to_lesson(row: &libsql::Row) -> Result<Lesson, DatabaseError> {
    let id: String = row.get(0)?;
    let ids = parse_id_list(&row.get::<String>(3)?)?;
    let tags = parse_id_list(&row.get::<String>(4)?)?;
    let sub_lessons = SubLessons::from_parallel(ids, tags)
        .map_err(|e| DatabaseError::InvalidState(format!("lesson {id}: {e}")))?;
    Ok(Lesson {
        author: row.get(1)?,
        title: row.get(2)?,
        sub_lessons,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
        id,
    })
}

impl TutorService {
    /// Create a lesson from co-indexed id and type-tag sequences.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` when the sequences differ in length.
    pub async fn create_lesson(
        &self,
        author: &str,
        title: &str,
        sub_lesson_ids: &[String],
        sub_lesson_types: &[String],
    ) -> Result<Lesson, DatabaseError> {
        let sub_lessons = SubLessons::from_parallel(sub_lesson_ids.iter().cloned(), sub_lesson_types)?;
        self.insert_lesson(author, title, sub_lessons).await
    }

    pub(crate) async fn insert_lesson(
        &self,
        author: &str,
        title: &str,
        sub_lessons: SubLessons,
    ) -> Result<Lesson, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_LESSON).await?;
        let (ids, tags) = sub_lessons.to_parallel();

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO lessons ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"),
                libsql::params![
                    id.as_str(),
                    author,
                    title,
                    encode_id_list(&ids)?,
                    encode_id_list(&tags)?,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await
            .with_entity(EntityType::Lesson, &id)?;

        tracing::debug!(lesson = %id, author, len = sub_lessons.len(), "created lesson");

        Ok(Lesson {
            id,
            author: author.to_string(),
            title: title.to_string(),
            sub_lessons,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_lesson(&self, id: &str) -> Result<Lesson, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM lessons WHERE id = ?1"), [id])
            .await
            .with_entity(EntityType::Lesson, id)?;
        let row = rows
            .next()
            .await
            .with_entity(EntityType::Lesson, id)?
            .ok_or_else(|| not_found(EntityType::Lesson, id))?;
        row_to_lesson(&row)
    }

    /// Every lesson written by `author`, most recently updated first.
    pub async fn get_lessons_by_author(&self, author: &str) -> Result<Vec<Lesson>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM lessons WHERE author = ?1 ORDER BY updated_at DESC"
                ),
                [author],
            )
            .await
            .with_entity(EntityType::Lesson, author)?;
        collect_lessons(&mut rows, author).await
    }

    /// All lessons, most recently updated first.
    pub async fn list_lessons(&self, limit: u32) -> Result<Vec<Lesson>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM lessons ORDER BY updated_at DESC LIMIT {limit}"),
                (),
            )
            .await
            .with_entity(EntityType::Lesson, "*")?;
        collect_lessons(&mut rows, "*").await
    }

    /// Check that `author` wrote `lesson_id`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the lesson does not exist and
    /// `DatabaseError::Unauthorized` if it has a different author.
    pub async fn is_author(&self, author: &str, lesson_id: &str) -> Result<(), DatabaseError> {
        self.authorized_lesson(author, lesson_id).await.map(|_| ())
    }

    /// Splice co-indexed id/tag blocks into the lesson at `location`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` when the blocks differ in
    /// length or `location` is past the end.
    pub async fn add_sub_lessons(
        &self,
        actor: &str,
        lesson_id: &str,
        sub_lesson_ids: &[String],
        sub_lesson_types: &[String],
        location: Location,
    ) -> Result<Lesson, DatabaseError> {
        let block = SubLessons::from_parallel(sub_lesson_ids.iter().cloned(), sub_lesson_types)?;
        let mut lesson = self.authorized_lesson(actor, lesson_id).await?;
        lesson
            .sub_lessons
            .insert_at(location, block.iter().cloned())?;
        self.write_sub_lessons(&mut lesson).await?;
        tracing::debug!(
            lesson = lesson_id,
            added = block.len(),
            len = lesson.sub_lessons.len(),
            "added sub-lessons"
        );
        Ok(lesson)
    }

    /// Remove every position whose id is in `ids`, together with its tag.
    pub async fn remove_sub_lessons(
        &self,
        actor: &str,
        lesson_id: &str,
        ids: &HashSet<String>,
    ) -> Result<Lesson, DatabaseError> {
        let mut lesson = self.authorized_lesson(actor, lesson_id).await?;
        let removed = lesson.sub_lessons.remove_all_matching(ids);
        self.write_sub_lessons(&mut lesson).await?;
        tracing::debug!(
            lesson = lesson_id,
            removed,
            len = lesson.sub_lessons.len(),
            "removed sub-lessons"
        );
        Ok(lesson)
    }

    /// Remove the single position `index`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` when `index` is not a valid position.
    pub async fn remove_sub_lesson(
        &self,
        actor: &str,
        lesson_id: &str,
        index: usize,
    ) -> Result<Lesson, DatabaseError> {
        let mut lesson = self.authorized_lesson(actor, lesson_id).await?;
        let removed: SubLesson = lesson.sub_lessons.remove_at(index)?;
        self.write_sub_lessons(&mut lesson).await?;
        tracing::debug!(
            lesson = lesson_id,
            index,
            removed = removed.id(),
            len = lesson.sub_lessons.len(),
            "removed sub-lesson"
        );
        Ok(lesson)
    }

    pub async fn update_lesson(
        &self,
        actor: &str,
        lesson_id: &str,
        update: LessonUpdate,
    ) -> Result<Lesson, DatabaseError> {
        let mut lesson = self.authorized_lesson(actor, lesson_id).await?;

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(title) = update.title {
            sets.push(format!("title = ?{idx}"));
            params.push(title.clone().into());
            idx += 1;
            lesson.title = title;
        }
        if let Some(sub_lessons) = update.sub_lessons {
            let (ids, tags) = sub_lessons.to_parallel();
            sets.push(format!("sub_lesson_ids = ?{idx}"));
            params.push(encode_id_list(&ids)?.into());
            idx += 1;
            sets.push(format!("sub_lesson_types = ?{idx}"));
            params.push(encode_id_list(&tags)?.into());
            idx += 1;
            lesson.sub_lessons = sub_lessons;
        }

        if sets.is_empty() {
            return Ok(lesson);
        }

        let now = Utc::now();
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(lesson_id.into());
        let sql = format!("UPDATE lessons SET {} WHERE id = ?{idx}", sets.join(", "));
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await
            .with_entity(EntityType::Lesson, lesson_id)?;
        lesson.updated_at = now;

        tracing::debug!(lesson = lesson_id, len = lesson.sub_lessons.len(), "updated lesson");
        Ok(lesson)
    }

    /// Delete a lesson. Referenced exercises and videos are left in place.
    pub async fn delete_lesson(&self, actor: &str, lesson_id: &str) -> Result<(), DatabaseError> {
        self.authorized_lesson(actor, lesson_id).await?;
        self.db()
            .conn()
            .execute("DELETE FROM lessons WHERE id = ?1", [lesson_id])
            .await
            .with_entity(EntityType::Lesson, lesson_id)?;
        tracing::debug!(lesson = lesson_id, "deleted lesson");
        Ok(())
    }

    /// Load a lesson, failing unless `actor` is its author.
    pub(crate) async fn authorized_lesson(
        &self,
        actor: &str,
        lesson_id: &str,
    ) -> Result<Lesson, DatabaseError> {
        let lesson = self.get_lesson(lesson_id).await?;
        if !lesson.is_authored_by(actor) {
            return Err(DatabaseError::Unauthorized {
                actor: actor.to_string(),
                lesson_id: lesson_id.to_string(),
            });
        }
        Ok(lesson)
    }

    /// Persist both sequence columns in full and bump `updated_at`.
    async fn write_sub_lessons(&self, lesson: &mut Lesson) -> Result<(), DatabaseError> {
        let now = Utc::now();
        let (ids, tags) = lesson.sub_lessons.to_parallel();
        self.db()
            .conn()
            .execute(
                "UPDATE lessons SET sub_lesson_ids = ?1, sub_lesson_types = ?2, updated_at = ?3 \
                 WHERE id = ?4",
                libsql::params![
                    encode_id_list(&ids)?,
                    encode_id_list(&tags)?,
                    now.to_rfc3339(),
                    lesson.id.as_str()
                ],
            )
            .await
            .with_entity(EntityType::Lesson, &lesson.id)?;
        lesson.updated_at = now;
        Ok(())
    }
}

/// `scope` names the query in `Access` errors: an author id, or `*` for all.
async fn collect_lessons(
    rows: &mut libsql::Rows,
    scope: &str,
) -> Result<Vec<Lesson>, DatabaseError> {
    let mut lessons = Vec::new();
    while let Some(row) = rows.next().await.with_entity(EntityType::Lesson, scope)? {
        lessons.push(row_to_lesson(&row)?);
    }
    Ok(lessons)
}
