//! Question update builder.

use serde::Serialize;

/// Partial question fields. `answer_type` is raw text and validated by
/// `update_question`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuestionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

pub struct QuestionUpdateBuilder(QuestionUpdate);

impl QuestionUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(QuestionUpdate::default())
    }

    #[must_use]
    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.0.question = Some(question.into());
        self
    }

    #[must_use]
    pub fn answer_type(mut self, answer_type: impl Into<String>) -> Self {
        self.0.answer_type = Some(answer_type.into());
        self
    }

    #[must_use]
    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        self.0.answer = Some(answer.into());
        self
    }

    #[must_use]
    pub fn build(self) -> QuestionUpdate {
        self.0
    }
}
