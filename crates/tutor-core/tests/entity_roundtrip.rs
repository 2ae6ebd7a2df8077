//! Serde roundtrip and JsonSchema validation tests for the stored and resolved shapes.

use chrono::Utc;
use schemars::schema_for;
use tutor_core::authoring::{LessonSpec, QuestionSpec, SubLessonSpec};
use tutor_core::composition::{SubLesson, SubLessons};
use tutor_core::entities::*;
use tutor_core::enums::*;
use tutor_core::resolved::*;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn question() -> Question {
    Question {
        id: "qst-0a1b2c3d".into(),
        question: "What is 6 x 7?".into(),
        answer_type: AnswerType::Number,
        answer: "42".into(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn video() -> Video {
    Video {
        id: "vid-11223344".into(),
        title: "Multiplication tables".into(),
        video_url: "https://videos.example/times".into(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

roundtrip_and_validate!(
    user_roundtrip,
    User,
    User {
        id: "usr-deadbeef".into(),
        username: "ada".into(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(question_roundtrip, Question, question());

roundtrip_and_validate!(video_roundtrip, Video, video());

roundtrip_and_validate!(
    exercise_roundtrip,
    Exercise,
    Exercise {
        id: "exr-99887766".into(),
        title: "Times tables".into(),
        questions: vec!["qst-0a1b2c3d".into(), "qst-0a1b2c3e".into()],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    lesson_roundtrip_keeps_unrecognized_entries,
    Lesson,
    Lesson {
        id: "lsn-a3f8b2c1".into(),
        author: "usr-deadbeef".into(),
        title: "Arithmetic".into(),
        sub_lessons: SubLessons::from(vec![
            SubLesson::Video("vid-11223344".into()),
            SubLesson::Unrecognized {
                tag: "slides".into(),
                id: "sld-00000001".into(),
            },
            SubLesson::Exercise("exr-99887766".into()),
        ]),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    resolved_lesson_roundtrip,
    ResolvedLesson,
    ResolvedLesson {
        id: "lsn-a3f8b2c1".into(),
        author_id: "usr-deadbeef".into(),
        author: "ada".into(),
        title: "Arithmetic".into(),
        sub_lessons: vec![
            ResolvedSubLesson::Video(video()),
            ResolvedSubLesson::Exercise(ResolvedExercise {
                id: "exr-99887766".into(),
                title: "Times tables".into(),
                questions: vec![question()],
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }),
        ],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    lesson_spec_roundtrip,
    LessonSpec,
    LessonSpec {
        title: "Arithmetic".into(),
        sub_lessons: vec![
            SubLessonSpec::Video {
                title: "Intro".into(),
                video_url: "https://videos.example/intro".into(),
            },
            SubLessonSpec::Exercise {
                title: "Drill".into(),
                questions: vec![QuestionSpec {
                    question: "2 + 2?".into(),
                    answer_type: "number".into(),
                    answer: "4".into(),
                }],
            },
        ],
    }
);

#[test]
fn lesson_serializes_sub_lessons_as_tagged_refs() {
    let lesson = Lesson {
        id: "lsn-a3f8b2c1".into(),
        author: "usr-deadbeef".into(),
        title: "Arithmetic".into(),
        sub_lessons: SubLessons::from_parallel(["vid-1", "exr-1"], ["video", "exercise"]).unwrap(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    let json = serde_json::to_value(&lesson).unwrap();
    assert_eq!(
        json["sub_lessons"],
        serde_json::json!([
            {"type": "video", "id": "vid-1"},
            {"type": "exercise", "id": "exr-1"}
        ])
    );
}

#[test]
fn resolved_sub_lesson_carries_type_tag() {
    let json = serde_json::to_value(ResolvedSubLesson::Video(video())).unwrap();
    assert_eq!(json["type"], "video");
    assert_eq!(json["video_url"], "https://videos.example/times");
}
