use clap::Subcommand;

use crate::cli::subcommands::{
    ExerciseCommands, LessonCommands, QuestionCommands, UserCommands, VideoCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Users (lesson authors).
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Questions.
    Question {
        #[command(subcommand)]
        action: QuestionCommands,
    },
    /// Exercises: ordered lists of questions.
    Exercise {
        #[command(subcommand)]
        action: ExerciseCommands,
    },
    /// Videos.
    Video {
        #[command(subcommand)]
        action: VideoCommands,
    },
    /// Lessons: ordered exercises and videos.
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },
}
