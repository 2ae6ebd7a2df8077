use serde_json::json;
use tutor_db::updates::question::QuestionUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuestionCommands;
use crate::commands::shared::parse::parse_answer;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tutor question`.
pub async fn handle(
    action: &QuestionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        QuestionCommands::Create {
            question,
            answer_type,
            answer,
        } => {
            let created = ctx
                .service
                .create_question(question, answer_type, answer)
                .await?;
            output(&created, flags.format)
        }
        QuestionCommands::Get { id } => output(&ctx.service.get_question(id).await?, flags.format),
        QuestionCommands::Update {
            id,
            question,
            answer_type,
            answer,
        } => {
            if question.is_none() && answer_type.is_none() && answer.is_none() {
                anyhow::bail!("At least one of --question, --answer-type, or --answer must be provided");
            }
            let mut builder = QuestionUpdateBuilder::new();
            if let Some(question) = question {
                builder = builder.question(question);
            }
            if let Some(answer_type) = answer_type {
                builder = builder.answer_type(answer_type);
            }
            if let Some(answer) = answer {
                builder = builder.answer(answer);
            }
            let updated = ctx.service.update_question(id, builder.build()).await?;
            output(&updated, flags.format)
        }
        QuestionCommands::Delete { id } => {
            ctx.service.delete_question(id).await?;
            output(&json!({"deleted": true, "question_id": id}), flags.format)
        }
        QuestionCommands::Answer { id, value } => {
            let candidate = parse_answer(value);
            let correct = ctx.service.answer_question(id, &candidate).await?;
            output(
                &json!({"question_id": id, "answer": candidate, "correct": correct}),
                flags.format,
            )
        }
    }
}
