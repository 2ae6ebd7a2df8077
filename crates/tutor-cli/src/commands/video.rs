use serde_json::json;
use tutor_db::updates::video::VideoUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::VideoCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tutor video`.
pub async fn handle(action: &VideoCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        VideoCommands::Create { title, url } => {
            output(&ctx.service.create_video(title, url).await?, flags.format)
        }
        VideoCommands::Get { id } => output(&ctx.service.get_video(id).await?, flags.format),
        VideoCommands::Update { id, title, url } => {
            if title.is_none() && url.is_none() {
                anyhow::bail!("At least one of --title or --url must be provided");
            }
            let mut builder = VideoUpdateBuilder::new();
            if let Some(title) = title {
                builder = builder.title(title);
            }
            if let Some(url) = url {
                builder = builder.video_url(url);
            }
            output(&ctx.service.update_video(id, builder.build()).await?, flags.format)
        }
        VideoCommands::Delete { id } => {
            ctx.service.delete_video(id).await?;
            output(&json!({"deleted": true, "video_id": id}), flags.format)
        }
    }
}
