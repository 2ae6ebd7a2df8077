use clap::Subcommand;

/// Question entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QuestionCommands {
    /// Create a question.
    Create {
        #[arg(long)]
        question: String,
        /// text, number or checkbox
        #[arg(long)]
        answer_type: String,
        #[arg(long)]
        answer: String,
    },
    /// Get a question by ID.
    Get { id: String },
    /// Update a question.
    Update {
        id: String,
        #[arg(long)]
        question: Option<String>,
        #[arg(long)]
        answer_type: Option<String>,
        #[arg(long)]
        answer: Option<String>,
    },
    /// Delete a question.
    Delete { id: String },
    /// Check an answer. The value is read as JSON (`42`, `true`, `"Paris"`);
    /// anything that is not valid JSON is taken as text.
    Answer { id: String, value: String },
}
