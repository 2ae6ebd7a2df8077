use serde_json::json;
use tutor_db::error::DatabaseError;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, stored: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if stored {
        return output(&ctx.service.get_lesson(id).await?, flags.format);
    }
    output(&ctx.service.get_resolved_lesson(id).await?, flags.format)
}

/// Prints `{"is_author": false}` for a different author rather than failing;
/// a missing lesson is still an error.
pub async fn is_author(
    id: &str,
    user: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let is_author = match ctx.service.is_author(user, id).await {
        Ok(()) => true,
        Err(DatabaseError::Unauthorized { .. }) => false,
        Err(error) => return Err(error.into()),
    };
    output(
        &json!({"lesson_id": id, "user_id": user, "is_author": is_author}),
        flags.format,
    )
}
