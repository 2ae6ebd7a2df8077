use std::collections::HashSet;

use serde_json::json;
use tutor_core::composition::Location;
use tutor_db::updates::lesson::LessonUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::actor::require_actor;
use crate::commands::shared::parse::parse_entries;
use crate::context::AppContext;
use crate::output::output;

pub async fn add(
    id: &str,
    entries: &[String],
    at: Option<usize>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let actor = require_actor(flags)?;
    let (ids, types) = parse_entries(entries)?;
    let lesson = ctx
        .service
        .add_sub_lessons(actor, id, &ids, &types, Location::from(at))
        .await?;
    output(&lesson, flags.format)
}

pub async fn remove(
    id: &str,
    sub_lessons: &[String],
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let actor = require_actor(flags)?;
    let remove: HashSet<String> = sub_lessons.iter().cloned().collect();
    let lesson = ctx.service.remove_sub_lessons(actor, id, &remove).await?;
    output(&lesson, flags.format)
}

pub async fn remove_at(
    id: &str,
    index: usize,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let actor = require_actor(flags)?;
    let lesson = ctx.service.remove_sub_lesson(actor, id, index).await?;
    output(&lesson, flags.format)
}

pub async fn update(
    id: &str,
    title: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let Some(title) = title else {
        anyhow::bail!("--title must be provided");
    };
    let actor = require_actor(flags)?;
    let update = LessonUpdateBuilder::new().title(title).build();
    let lesson = ctx.service.update_lesson(actor, id, update).await?;
    output(&lesson, flags.format)
}

pub async fn delete(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = require_actor(flags)?;
    ctx.service.delete_lesson(actor, id).await?;
    output(&json!({"deleted": true, "lesson_id": id}), flags.format)
}
