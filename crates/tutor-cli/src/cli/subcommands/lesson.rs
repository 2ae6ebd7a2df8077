use std::path::PathBuf;

use clap::Subcommand;

/// Lesson commands. Mutations act as the user given by `--as`.
#[derive(Clone, Debug, Subcommand)]
pub enum LessonCommands {
    /// Create a lesson and all its sub-lessons from a JSON spec file.
    Author { file: PathBuf },
    /// Replace the title and sub-lessons of a lesson from a JSON spec file.
    Rewrite { id: String, file: PathBuf },
    /// Get a lesson, resolved into its exercises and videos.
    Get {
        id: String,
        /// Print the stored record instead of the resolved view.
        #[arg(long)]
        stored: bool,
    },
    /// List lessons, most recently updated first.
    List {
        /// Only lessons written by this username.
        #[arg(long)]
        author: Option<String>,
        /// Resolve every lesson.
        #[arg(long)]
        resolved: bool,
    },
    /// Insert sub-lessons as one block.
    Add {
        id: String,
        /// `type:id`, repeatable; order is kept.
        #[arg(long, required = true)]
        entry: Vec<String>,
        /// 0-based position; appends when omitted.
        #[arg(long)]
        at: Option<usize>,
    },
    /// Remove every position referencing the given ids.
    Remove {
        id: String,
        #[arg(long = "sub-lesson", required = true)]
        sub_lesson: Vec<String>,
    },
    /// Remove the sub-lesson at a position.
    RemoveAt { id: String, index: usize },
    /// Update a lesson's title.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
    },
    /// Delete a lesson.
    Delete { id: String },
    /// Check whether a user authored a lesson.
    IsAuthor {
        id: String,
        /// Defaults to the `--as` user.
        #[arg(long)]
        user: Option<String>,
    },
}
