//! Hydrated view types produced by the resolution engine.
//!
//! These mirror the stored entities with every id reference replaced by the
//! record it points to. They are read-only presentation shapes and are never
//! written back.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Exercise, Question, Video};

/// An exercise with its question ids replaced by the full questions, in order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResolvedExercise {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResolvedExercise {
    /// Attach already-loaded questions to an exercise.
    #[must_use]
    pub fn new(exercise: Exercise, questions: Vec<Question>) -> Self {
        Self {
            id: exercise.id,
            title: exercise.title,
            questions,
            created_at: exercise.created_at,
            updated_at: exercise.updated_at,
        }
    }

    /// Ids of the hydrated questions, in order.
    #[must_use]
    pub fn question_ids(&self) -> Vec<&str> {
        self.questions.iter().map(|q| q.id.as_str()).collect()
    }
}

/// One resolved position of a lesson.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolvedSubLesson {
    Exercise(ResolvedExercise),
    Video(Video),
}

impl ResolvedSubLesson {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Exercise(exercise) => &exercise.id,
            Self::Video(video) => &video.id,
        }
    }
}

/// A lesson with its author resolved to a display name and its sub-lessons
/// hydrated. Positions with an unrecognized type tag are absent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResolvedLesson {
    pub id: String,
    pub author_id: String,
    /// Display name of the author.
    pub author: String,
    pub title: String,
    pub sub_lessons: Vec<ResolvedSubLesson>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
