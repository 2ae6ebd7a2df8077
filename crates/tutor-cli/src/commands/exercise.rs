use std::collections::HashSet;

use serde_json::json;
use tutor_core::composition::Location;
use tutor_db::updates::exercise::ExerciseUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ExerciseCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tutor exercise`.
pub async fn handle(
    action: &ExerciseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ExerciseCommands::Create { title, question } => {
            output(&ctx.service.create_exercise(title, question).await?, flags.format)
        }
        ExerciseCommands::Get { id } => output(&ctx.service.get_exercise(id).await?, flags.format),
        ExerciseCommands::List => {
            let exercises = ctx.service.list_exercises(ctx.limit(flags)).await?;
            output(&exercises, flags.format)
        }
        ExerciseCommands::Add { id, question, at } => {
            let exercise = ctx
                .service
                .add_questions(id, question, Location::from(*at))
                .await?;
            output(&exercise, flags.format)
        }
        ExerciseCommands::Remove { id, question } => {
            let remove: HashSet<String> = question.iter().cloned().collect();
            output(&ctx.service.remove_questions(id, &remove).await?, flags.format)
        }
        ExerciseCommands::Update { id, title } => {
            let Some(title) = title else {
                anyhow::bail!("--title must be provided");
            };
            let update = ExerciseUpdateBuilder::new().title(title).build();
            output(&ctx.service.update_exercise(id, update).await?, flags.format)
        }
        ExerciseCommands::Delete { id } => {
            ctx.service.delete_exercise(id).await?;
            output(&json!({"deleted": true, "exercise_id": id}), flags.format)
        }
        ExerciseCommands::Show { id } => {
            let exercise = ctx.service.get_exercise(id).await?;
            let resolved = ctx.service.resolver().resolve_exercise(exercise).await?;
            output(&resolved, flags.format)
        }
    }
}
