mod author;
mod edit;
mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LessonCommands;
use crate::commands::shared::actor::require_actor;
use crate::context::AppContext;

/// Handle `tutor lesson`.
pub async fn handle(
    action: &LessonCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LessonCommands::Author { file } => author::run(file, ctx, flags).await,
        LessonCommands::Rewrite { id, file } => author::rewrite(id, file, ctx, flags).await,
        LessonCommands::Get { id, stored } => get::run(id, *stored, ctx, flags).await,
        LessonCommands::List { author, resolved } => {
            list::run(author.as_deref(), *resolved, ctx, flags).await
        }
        LessonCommands::Add { id, entry, at } => edit::add(id, entry, *at, ctx, flags).await,
        LessonCommands::Remove { id, sub_lesson } => {
            edit::remove(id, sub_lesson, ctx, flags).await
        }
        LessonCommands::RemoveAt { id, index } => edit::remove_at(id, *index, ctx, flags).await,
        LessonCommands::Update { id, title } => {
            edit::update(id, title.as_deref(), ctx, flags).await
        }
        LessonCommands::Delete { id } => edit::delete(id, ctx, flags).await,
        LessonCommands::IsAuthor { id, user } => {
            let user = match user {
                Some(user) => user.as_str(),
                None => require_actor(flags)?,
            };
            get::is_author(id, user, ctx, flags).await
        }
    }
}
