//! Answer types, sub-lesson kinds and entity kinds for Tutor.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// AnswerType
// ---------------------------------------------------------------------------

/// How a question expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnswerType {
    Text,
    Number,
    Checkbox,
}

impl AnswerType {
    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Checkbox => "checkbox",
        }
    }
}

impl fmt::Display for AnswerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnswerType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "number" => Ok(Self::Number),
            "checkbox" => Ok(Self::Checkbox),
            other => Err(CoreError::Validation(format!(
                "answer type '{other}' is not one of text, number, checkbox"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// SubLessonKind
// ---------------------------------------------------------------------------

/// The recognized type tags of a lesson's sub-lessons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubLessonKind {
    Exercise,
    Video,
}

impl SubLessonKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exercise => "exercise",
            Self::Video => "video",
        }
    }

    /// Parse a stored type tag. Unknown tags yield `None` rather than an error;
    /// the composition layer keeps them as unrecognized entries.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "exercise" => Some(Self::Exercise),
            "video" => Some(Self::Video),
            _ => None,
        }
    }
}

impl fmt::Display for SubLessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Every stored entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    User,
    Question,
    Exercise,
    Video,
    Lesson,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Question => "question",
            Self::Exercise => "exercise",
            Self::Video => "video",
            Self::Lesson => "lesson",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SubLessonKind> for EntityType {
    fn from(kind: SubLessonKind) -> Self {
        match kind {
            SubLessonKind::Exercise => Self::Exercise,
            SubLessonKind::Video => Self::Video,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(answer_text, AnswerType, AnswerType::Text, "text");
    test_serde_roundtrip!(answer_checkbox, AnswerType, AnswerType::Checkbox, "checkbox");
    test_serde_roundtrip!(kind_exercise, SubLessonKind, SubLessonKind::Exercise, "exercise");
    test_serde_roundtrip!(entity_lesson, EntityType, EntityType::Lesson, "lesson");

    #[test]
    fn answer_type_parses_the_three_values() {
        assert_eq!("text".parse::<AnswerType>().unwrap(), AnswerType::Text);
        assert_eq!("number".parse::<AnswerType>().unwrap(), AnswerType::Number);
        assert_eq!("checkbox".parse::<AnswerType>().unwrap(), AnswerType::Checkbox);
    }

    #[test]
    fn answer_type_rejects_boolean() {
        let err = "boolean".parse::<AnswerType>().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn answer_type_is_case_sensitive() {
        assert!("Text".parse::<AnswerType>().is_err());
    }

    #[test]
    fn sub_lesson_kind_from_tag() {
        assert_eq!(SubLessonKind::from_tag("video"), Some(SubLessonKind::Video));
        assert_eq!(SubLessonKind::from_tag("exercise"), Some(SubLessonKind::Exercise));
        assert_eq!(SubLessonKind::from_tag("quiz"), None);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", AnswerType::Number), "number");
        assert_eq!(format!("{}", SubLessonKind::Video), "video");
        assert_eq!(format!("{}", EntityType::Question), "question");
    }
}
