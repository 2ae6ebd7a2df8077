use clap::Subcommand;

/// Exercise entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ExerciseCommands {
    /// Create an exercise.
    Create {
        #[arg(long)]
        title: String,
        /// Question ID, repeatable; order is kept.
        #[arg(long)]
        question: Vec<String>,
    },
    /// Get an exercise by ID.
    Get { id: String },
    /// List exercises, most recently updated first.
    List,
    /// Insert questions as one block.
    Add {
        id: String,
        #[arg(long, required = true)]
        question: Vec<String>,
        /// 0-based position; appends when omitted.
        #[arg(long)]
        at: Option<usize>,
    },
    /// Remove every occurrence of the given questions.
    Remove {
        id: String,
        #[arg(long, required = true)]
        question: Vec<String>,
    },
    /// Update an exercise.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
    },
    /// Delete an exercise.
    Delete { id: String },
    /// Show an exercise with its questions expanded.
    Show { id: String },
}
