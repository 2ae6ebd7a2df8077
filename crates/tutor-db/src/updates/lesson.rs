//! Lesson update builder.
//!
//! The author is fixed at creation and has no setter.

use serde::Serialize;
use tutor_core::composition::SubLessons;

#[derive(Debug, Clone, Default, Serialize)]
pub struct LessonUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Whole-sequence replacement of the composition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_lessons: Option<SubLessons>,
}

pub struct LessonUpdateBuilder(LessonUpdate);

impl LessonUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(LessonUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn sub_lessons(mut self, sub_lessons: SubLessons) -> Self {
        self.0.sub_lessons = Some(sub_lessons);
        self
    }

    #[must_use]
    pub fn build(self) -> LessonUpdate {
        self.0
    }
}
