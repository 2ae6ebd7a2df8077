//! Question repository: CRUD plus answer checking.

use chrono::Utc;

use tutor_core::entities::{AnswerInput, Question};
use tutor_core::enums::{AnswerType, EntityType};
use tutor_core::ids::PREFIX_QUESTION;

use crate::error::DatabaseError;
use crate::helpers::{WithEntity, not_found, parse_datetime};
use crate::service::TutorService;
use crate::updates::question::QuestionUpdate;

const SELECT_COLS: &str = "id, question, answer_type, answer, created_at, updated_at";

fn row_to_question(row: &libsql::Row) -> Result<Question, DatabaseError> {
    let answer_type: String = row.get(2)?;
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer_type: answer_type
            .parse::<AnswerType>()
            .map_err(|e| DatabaseError::InvalidState(e.to_string()))?,
        answer: row.get(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl TutorService {
    /// Create a question. `answer_type` must be `text`, `number` or `checkbox`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` for any other answer type.
    pub async fn create_question(
        &self,
        question: &str,
        answer_type: &str,
        answer: &str,
    ) -> Result<Question, DatabaseError> {
        let answer_type: AnswerType = answer_type.parse()?;
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_QUESTION).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO questions ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"),
                libsql::params![
                    id.as_str(),
                    question,
                    answer_type.as_str(),
                    answer,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await
            .with_entity(EntityType::Question, &id)?;

        Ok(Question {
            id,
            question: question.to_string(),
            answer_type,
            answer: answer.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_question(&self, id: &str) -> Result<Question, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM questions WHERE id = ?1"),
                [id],
            )
            .await
            .with_entity(EntityType::Question, id)?;
        let row = rows
            .next()
            .await
            .with_entity(EntityType::Question, id)?
            .ok_or_else(|| not_found(EntityType::Question, id))?;
        row_to_question(&row)
    }

    /// Apply a partial update. A new `answer_type` is validated before anything
    /// is written.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` for an unknown answer type and
    /// `DatabaseError::NotFound` if the question does not exist.
    pub async fn update_question(
        &self,
        id: &str,
        update: QuestionUpdate,
    ) -> Result<Question, DatabaseError> {
        let answer_type = update
            .answer_type
            .as_deref()
            .map(str::parse::<AnswerType>)
            .transpose()?;

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(question) = update.question {
            sets.push(format!("question = ?{idx}"));
            params.push(question.into());
            idx += 1;
        }
        if let Some(answer_type) = answer_type {
            sets.push(format!("answer_type = ?{idx}"));
            params.push(answer_type.as_str().into());
            idx += 1;
        }
        if let Some(answer) = update.answer {
            sets.push(format!("answer = ?{idx}"));
            params.push(answer.into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_question(id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        params.push(id.into());
        let sql = format!("UPDATE questions SET {} WHERE id = ?{idx}", sets.join(", "));
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await
            .with_entity(EntityType::Question, id)?;
        if changed == 0 {
            return Err(not_found(EntityType::Question, id));
        }

        self.get_question(id).await
    }

    pub async fn delete_question(&self, id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM questions WHERE id = ?1", [id])
            .await
            .with_entity(EntityType::Question, id)?;
        if changed == 0 {
            return Err(not_found(EntityType::Question, id));
        }
        Ok(())
    }

    /// Check a candidate answer against a stored question.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the question does not exist.
    pub async fn answer_question(
        &self,
        id: &str,
        candidate: &AnswerInput,
    ) -> Result<bool, DatabaseError> {
        let question = self.get_question(id).await?;
        Ok(question.accepts(candidate))
    }
}
