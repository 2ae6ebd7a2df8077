//! One-shot lesson authoring.
//!
//! Builds the leaf records a request describes (questions, exercises,
//! videos) in input order, then creates or rewrites the lesson that
//! references them. Nothing is rolled back on failure: records created
//! before an invalid spec remain as orphans.

use tutor_core::authoring::SubLessonSpec;
use tutor_core::composition::{SubLesson, SubLessons};
use tutor_core::entities::Lesson;

use crate::error::DatabaseError;
use crate::service::TutorService;
use crate::updates::lesson::LessonUpdateBuilder;

impl TutorService {
    /// Create a lesson and all of its sub-lessons from specs.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidArgument` if any question spec has an
    /// unknown answer type.
    pub async fn author_lesson(
        &self,
        author: &str,
        title: &str,
        specs: &[SubLessonSpec],
    ) -> Result<Lesson, DatabaseError> {
        let sub_lessons = self.build_sub_lessons(specs).await?;
        self.insert_lesson(author, title, sub_lessons).await
    }

    /// Replace the title and whole composition of a lesson `actor` authored,
    /// building fresh sub-lessons from specs. The lesson keeps its id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Unauthorized` before creating anything if
    /// `actor` is not the author.
    pub async fn rewrite_lesson(
        &self,
        actor: &str,
        lesson_id: &str,
        title: &str,
        specs: &[SubLessonSpec],
    ) -> Result<Lesson, DatabaseError> {
        self.authorized_lesson(actor, lesson_id).await?;
        let sub_lessons = self.build_sub_lessons(specs).await?;
        let update = LessonUpdateBuilder::new()
            .title(title)
            .sub_lessons(sub_lessons)
            .build();
        self.update_lesson(actor, lesson_id, update).await
    }

    async fn build_sub_lessons(
        &self,
        specs: &[SubLessonSpec],
    ) -> Result<SubLessons, DatabaseError> {
        let mut sub_lessons = SubLessons::new();
        for spec in specs {
            let entry = match spec {
                SubLessonSpec::Video { title, video_url } => {
                    SubLesson::Video(self.create_video(title, video_url).await?.id)
                }
                SubLessonSpec::Exercise { title, questions } => {
                    let mut question_ids = Vec::with_capacity(questions.len());
                    for q in questions {
                        let question = self
                            .create_question(&q.question, &q.answer_type, &q.answer)
                            .await?;
                        question_ids.push(question.id);
                    }
                    SubLesson::Exercise(self.create_exercise(title, &question_ids).await?.id)
                }
            };
            tracing::debug!(
                kind = %spec.kind(),
                title = spec.title(),
                id = entry.id(),
                "authored sub-lesson"
            );
            sub_lessons.append([entry]);
        }
        Ok(sub_lessons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{seed_user, test_service};
    use pretty_assertions::assert_eq;
    use tutor_core::authoring::QuestionSpec;
    use tutor_core::resolved::ResolvedSubLesson;

    fn question(text: &str, answer_type: &str, answer: &str) -> QuestionSpec {
        QuestionSpec {
            question: text.into(),
            answer_type: answer_type.into(),
            answer: answer.into(),
        }
    }

    fn specs() -> Vec<SubLessonSpec> {
        vec![
            SubLessonSpec::Exercise {
                title: "Warm-up".into(),
                questions: vec![
                    question("1 + 1?", "number", "2"),
                    question("Is 2 even?", "checkbox", "true"),
                ],
            },
            SubLessonSpec::Video {
                title: "Lecture".into(),
                video_url: "https://videos.example/lecture".into(),
            },
        ]
    }

    #[tokio::test]
    async fn author_lesson_builds_in_input_order() {
        let svc = test_service().await;
        let author = seed_user(&svc, "ada").await;
        let lesson = svc.author_lesson(&author, "Parity", &specs()).await.unwrap();

        assert_eq!(lesson.sub_lesson_types(), vec!["exercise", "video"]);

        let resolved = svc.get_resolved_lesson(&lesson.id).await.unwrap();
        match &resolved.sub_lessons[..] {
            [ResolvedSubLesson::Exercise(ex), ResolvedSubLesson::Video(video)] => {
                assert_eq!(ex.title, "Warm-up");
                assert_eq!(ex.questions.len(), 2);
                assert_eq!(ex.questions[0].question, "1 + 1?");
                assert_eq!(video.title, "Lecture");
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[tokio::test]
    async fn author_lesson_rejects_bad_answer_type() {
        let svc = test_service().await;
        let bad = vec![SubLessonSpec::Exercise {
            title: "Broken".into(),
            questions: vec![question("?", "boolean", "true")],
        }];
        let result = svc.author_lesson("usr-1", "Broken", &bad).await;
        assert!(matches!(result, Err(DatabaseError::InvalidArgument(_))));
        assert!(svc.list_lessons(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rewrite_lesson_keeps_id() {
        let svc = test_service().await;
        let author = seed_user(&svc, "ada").await;
        let lesson = svc.author_lesson(&author, "Draft", &specs()).await.unwrap();

        let only_video = vec![SubLessonSpec::Video {
            title: "Recap".into(),
            video_url: "https://videos.example/recap".into(),
        }];
        let rewritten = svc
            .rewrite_lesson(&author, &lesson.id, "Final", &only_video)
            .await
            .unwrap();
        assert_eq!(rewritten.id, lesson.id);
        assert_eq!(rewritten.title, "Final");
        assert_eq!(rewritten.sub_lesson_types(), vec!["video"]);
    }

    #[tokio::test]
    async fn rewrite_lesson_requires_author() {
        let svc = test_service().await;
        let lesson = svc.author_lesson("usr-1", "Draft", &[]).await.unwrap();
        let result = svc.rewrite_lesson("usr-2", &lesson.id, "Hijack", &specs()).await;
        assert!(matches!(result, Err(DatabaseError::Unauthorized { .. })));
        assert!(svc.list_exercises(10).await.unwrap().is_empty());
    }
}
