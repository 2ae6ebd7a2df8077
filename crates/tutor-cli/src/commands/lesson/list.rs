use tutor_core::entities::Lesson;
use tutor_db::service::TutorService;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    author: Option<&str>,
    resolved: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let lessons = lessons_for(&ctx.service, author, ctx.limit(flags)).await?;

    if resolved {
        let resolved = ctx.service.resolver().resolve_lessons(lessons).await?;
        return output(&resolved, flags.format);
    }
    output(&lessons, flags.format)
}

/// Lessons by the user named `author`, or all lessons, capped at `limit`.
async fn lessons_for(
    service: &TutorService,
    author: Option<&str>,
    limit: u32,
) -> anyhow::Result<Vec<Lesson>> {
    let mut lessons = match author {
        Some(username) => {
            let author = service.get_user_by_username(username).await?;
            service.get_lessons_by_author(&author.id).await?
        }
        None => service.list_lessons(limit).await?,
    };
    lessons.truncate(usize::try_from(limit)?);
    Ok(lessons)
}
