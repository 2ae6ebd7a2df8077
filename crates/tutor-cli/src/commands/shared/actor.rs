use crate::cli::GlobalFlags;

/// The user id lesson mutations act as.
pub fn require_actor(flags: &GlobalFlags) -> anyhow::Result<&str> {
    flags
        .actor
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("This command changes a lesson. Pass --as <user-id>."))
}
