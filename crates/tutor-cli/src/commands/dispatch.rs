use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::User { action } => commands::user::handle(&action, ctx, flags).await,
        Commands::Question { action } => commands::question::handle(&action, ctx, flags).await,
        Commands::Exercise { action } => commands::exercise::handle(&action, ctx, flags).await,
        Commands::Video { action } => commands::video::handle(&action, ctx, flags).await,
        Commands::Lesson { action } => commands::lesson::handle(&action, ctx, flags).await,
    }
}
