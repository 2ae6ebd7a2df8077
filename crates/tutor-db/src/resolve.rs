//! Resolution engine: expands stored references into nested views.
//!
//! Reads only. A lesson resolves to its author's display name plus, for each
//! position in order, the hydrated exercise (with its questions) or video.
//! Positions whose type tag is not recognized are skipped. A missing
//! exercise, video or question fails the whole resolution with
//! `DatabaseError::NotFound`.
//!
//! Identity lookups go through an [`IdentityResolver`]: one call per lesson,
//! or one batched call for a list of lessons. Sub-entity lookups are issued
//! one by one.

use tutor_core::composition::SubLesson;
use tutor_core::entities::{Exercise, Lesson};
use tutor_core::resolved::{ResolvedExercise, ResolvedLesson, ResolvedSubLesson};

use crate::error::DatabaseError;
use crate::identity::IdentityResolver;
use crate::service::TutorService;

pub struct Resolver<'a, I> {
    store: &'a TutorService,
    identity: &'a I,
}

impl<'a, I: IdentityResolver> Resolver<'a, I> {
    #[must_use]
    pub const fn new(store: &'a TutorService, identity: &'a I) -> Self {
        Self { store, identity }
    }

    /// Replace each question id with its full record, keeping order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for the first missing question.
    pub async fn resolve_exercise(
        &self,
        exercise: Exercise,
    ) -> Result<ResolvedExercise, DatabaseError> {
        let mut questions = Vec::with_capacity(exercise.questions.len());
        for id in &exercise.questions {
            questions.push(self.store.get_question(id).await?);
        }
        Ok(ResolvedExercise::new(exercise, questions))
    }

    /// Resolve one lesson with a single identity call for its author.
    pub async fn resolve_lesson(&self, lesson: Lesson) -> Result<ResolvedLesson, DatabaseError> {
        let author = self.identity.id_to_display_name(&lesson.author).await?;
        self.assemble(lesson, author).await
    }

    /// Resolve many lessons with one batched identity call for all authors.
    /// Output order matches input order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the identity collaborator
    /// returns a different number of names than it was given ids.
    pub async fn resolve_lessons(
        &self,
        lessons: Vec<Lesson>,
    ) -> Result<Vec<ResolvedLesson>, DatabaseError> {
        if lessons.is_empty() {
            return Ok(Vec::new());
        }

        let author_ids: Vec<String> = lessons.iter().map(|l| l.author.clone()).collect();
        let names = self.identity.ids_to_display_names(&author_ids).await?;
        if names.len() != lessons.len() {
            return Err(DatabaseError::InvalidState(format!(
                "identity lookup returned {} names for {} authors",
                names.len(),
                lessons.len()
            )));
        }

        let mut resolved = Vec::with_capacity(lessons.len());
        for (lesson, author) in lessons.into_iter().zip(names) {
            resolved.push(self.assemble(lesson, author).await?);
        }
        Ok(resolved)
    }

    async fn assemble(
        &self,
        lesson: Lesson,
        author: String,
    ) -> Result<ResolvedLesson, DatabaseError> {
        let mut sub_lessons = Vec::with_capacity(lesson.sub_lessons.len());
        for entry in &lesson.sub_lessons {
            match entry {
                SubLesson::Exercise(id) => {
                    let exercise = self.store.get_exercise(id).await?;
                    sub_lessons.push(ResolvedSubLesson::Exercise(
                        self.resolve_exercise(exercise).await?,
                    ));
                }
                SubLesson::Video(id) => {
                    sub_lessons.push(ResolvedSubLesson::Video(self.store.get_video(id).await?));
                }
                SubLesson::Unrecognized { tag, id } => {
                    tracing::debug!(lesson = %lesson.id, tag, id, "skipping unrecognized sub-lesson");
                }
            }
        }

        Ok(ResolvedLesson {
            id: lesson.id,
            author_id: lesson.author,
            author,
            title: lesson.title,
            sub_lessons,
            created_at: lesson.created_at,
            updated_at: lesson.updated_at,
        })
    }
}

impl TutorService {
    /// A resolver that uses this service for both content and identity.
    #[must_use]
    pub const fn resolver(&self) -> Resolver<'_, Self> {
        Resolver::new(self, self)
    }

    /// Load and resolve a lesson by id.
    pub async fn get_resolved_lesson(&self, id: &str) -> Result<ResolvedLesson, DatabaseError> {
        let lesson = self.get_lesson(id).await?;
        self.resolver().resolve_lesson(lesson).await
    }
}
