//! Input shapes for authoring a lesson in one request.
//!
//! A request is a flat, ordered list of sub-lesson specs. Each spec produces
//! the leaf records it describes and contributes exactly one (id, tag)
//! position to the new lesson, in input order.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SubLessonKind;

/// One question to create inside an exercise spec. `answer_type` is kept as
/// raw text and validated by the question store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionSpec {
    pub question: String,
    pub answer_type: String,
    pub answer: String,
}

/// One sub-lesson to create.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SubLessonSpec {
    Video {
        title: String,
        video_url: String,
    },
    Exercise {
        title: String,
        #[serde(default)]
        questions: Vec<QuestionSpec>,
    },
}

impl SubLessonSpec {
    #[must_use]
    pub const fn kind(&self) -> SubLessonKind {
        match self {
            Self::Video { .. } => SubLessonKind::Video,
            Self::Exercise { .. } => SubLessonKind::Exercise,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Video { title, .. } | Self::Exercise { title, .. } => title,
        }
    }
}

/// A whole lesson-authoring request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LessonSpec {
    pub title: String,
    #[serde(default)]
    pub sub_lessons: Vec<SubLessonSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_request() {
        let json = r#"{
            "title": "Fractions",
            "sub_lessons": [
                {"type": "video", "title": "Intro", "video_url": "https://v.example/1"},
                {"type": "exercise", "title": "Practice", "questions": [
                    {"question": "1/2 + 1/2?", "answer_type": "number", "answer": "1"}
                ]}
            ]
        }"#;
        let spec: LessonSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.sub_lessons.len(), 2);
        assert_eq!(spec.sub_lessons[0].kind(), SubLessonKind::Video);
        assert_eq!(spec.sub_lessons[1].kind(), SubLessonKind::Exercise);
        assert_eq!(spec.sub_lessons[1].title(), "Practice");
    }

    #[test]
    fn unknown_spec_type_is_rejected() {
        let json = r#"{"type": "slides", "title": "Deck"}"#;
        assert!(serde_json::from_str::<SubLessonSpec>(json).is_err());
    }
}
