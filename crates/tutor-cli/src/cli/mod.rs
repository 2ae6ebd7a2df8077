use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `tutor` binary.
#[derive(Debug, Parser)]
#[command(name = "tutor", version, about = "Tutor - lessons, exercises and videos")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database file (overrides `database.path` from config)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// User id to act as for lesson mutations
    #[arg(long = "as", global = true, value_name = "USER_ID")]
    pub actor: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            database: self.database.clone(),
            actor: self.actor.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::{LessonCommands, QuestionCommands, UserCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "tutor",
            "--format",
            "raw",
            "--as",
            "usr-1",
            "--verbose",
            "lesson",
            "delete",
            "lsn-1",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.actor.as_deref(), Some("usr-1"));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Lesson {
                action: LessonCommands::Delete { .. }
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["tutor", "question", "get", "qst-1", "--quiet"])
            .expect("cli should parse");
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Question {
                action: QuestionCommands::Get { .. }
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["tutor", "--format", "table", "user", "get", "usr-1"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn repeated_entries_collect_in_order() {
        let cli = Cli::try_parse_from([
            "tutor",
            "lesson",
            "add",
            "lsn-1",
            "--entry",
            "video:vid-1",
            "--entry",
            "exercise:exr-1",
            "--at",
            "0",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Lesson {
                action: LessonCommands::Add { entry, at, .. },
            } => {
                assert_eq!(entry, vec!["video:vid-1", "exercise:exr-1"]);
                assert_eq!(at, Some(0));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["tutor", "--database", "/tmp/t.db", "lesson", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.database.as_deref(), Some("/tmp/t.db"));
        assert!(flags.actor.is_none());
    }

    #[test]
    fn lesson_list_author_and_user_find_take_usernames() {
        let cli = Cli::try_parse_from(["tutor", "lesson", "list", "--author", "ada", "--limit", "5"])
            .expect("cli should parse");
        assert_eq!(cli.limit, Some(5));
        assert!(matches!(
            cli.command,
            Commands::Lesson {
                action: LessonCommands::List { author: Some(ref name), .. }
            } if name == "ada"
        ));

        let cli = Cli::try_parse_from(["tutor", "user", "find", "ada"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::User {
                action: UserCommands::Find { ref username }
            } if username == "ada"
        ));
    }
}
