use clap::Subcommand;

/// Video entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VideoCommands {
    /// Create a video.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        url: String,
    },
    /// Get a video by ID.
    Get { id: String },
    /// Update a video.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        url: Option<String>,
    },
    /// Delete a video.
    Delete { id: String },
}
