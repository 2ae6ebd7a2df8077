//! Exercise update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExerciseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Whole-sequence replacement of the question ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<String>>,
}

pub struct ExerciseUpdateBuilder(ExerciseUpdate);

impl ExerciseUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ExerciseUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn questions(mut self, questions: Vec<String>) -> Self {
        self.0.questions = Some(questions);
        self
    }

    #[must_use]
    pub fn build(self) -> ExerciseUpdate {
        self.0
    }
}
