use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::composition::SubLessons;

/// A lesson: an author-owned, ordered composition of exercises and videos.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Lesson {
    pub id: String,
    /// User id of the author. Fixed at creation.
    pub author: String,
    pub title: String,
    pub sub_lessons: SubLessons,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lesson {
    /// Sub-lesson ids in position order.
    #[must_use]
    pub fn sub_lesson_ids(&self) -> Vec<&str> {
        self.sub_lessons.ids()
    }

    /// Sub-lesson type tags in position order, co-indexed with
    /// [`Lesson::sub_lesson_ids`].
    #[must_use]
    pub fn sub_lesson_types(&self) -> Vec<&str> {
        self.sub_lessons.tags()
    }

    #[must_use]
    pub fn is_authored_by(&self, user_id: &str) -> bool {
        self.author == user_id
    }
}
