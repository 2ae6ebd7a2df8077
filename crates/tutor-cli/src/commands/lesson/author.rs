use std::path::Path;

use anyhow::Context;
use tutor_core::authoring::LessonSpec;

use crate::cli::GlobalFlags;
use crate::commands::shared::actor::require_actor;
use crate::context::AppContext;
use crate::output::output;

fn read_spec(file: &Path) -> anyhow::Result<LessonSpec> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read lesson spec {}", file.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid lesson spec {}", file.display()))
}

pub async fn run(file: &Path, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let author = require_actor(flags)?;
    let spec = read_spec(file)?;
    let lesson = ctx
        .service
        .author_lesson(author, &spec.title, &spec.sub_lessons)
        .await?;
    output(&lesson, flags.format)
}

pub async fn rewrite(
    id: &str,
    file: &Path,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let actor = require_actor(flags)?;
    let spec = read_spec(file)?;
    let lesson = ctx
        .service
        .rewrite_lesson(actor, id, &spec.title, &spec.sub_lessons)
        .await?;
    output(&lesson, flags.format)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::read_spec;

    #[test]
    fn reads_spec_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"title": "Intro", "sub_lessons": [{{"type": "video", "title": "Hello", "video_url": "https://v/1"}}]}}"#
        )
        .unwrap();
        let spec = read_spec(file.path()).unwrap();
        assert_eq!(spec.title, "Intro");
        assert_eq!(spec.sub_lessons.len(), 1);
    }

    #[test]
    fn unknown_sub_lesson_type_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"title": "Intro", "sub_lessons": [{{"type": "poll", "title": "Vote"}}]}}"#
        )
        .unwrap();
        let err = read_spec(file.path()).expect_err("should fail");
        assert!(format!("{err:#}").contains("invalid lesson spec"));
    }
}
