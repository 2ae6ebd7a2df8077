use std::path::Path;

use anyhow::Context;
use tutor_config::TutorConfig;
use tutor_db::service::TutorService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: TutorService,
    pub config: TutorConfig,
}

impl AppContext {
    /// Open the database named by `--database`, or by config when the flag
    /// is absent. Creates the parent directory of a file database.
    pub async fn init(mut config: TutorConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        if let Some(path) = &flags.database {
            config.database.path.clone_from(path);
        }

        if !config.database.is_in_memory() {
            if let Some(parent) = Path::new(&config.database.path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create database directory {}", parent.display())
                    })?;
                }
            }
        }

        tracing::debug!(path = %config.database.path, "opening database");
        let service = TutorService::new_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open database {}", config.database.path))?;

        Ok(Self { service, config })
    }

    /// Effective list limit: `--limit` flag, then `general.default_limit`.
    #[must_use]
    pub fn limit(&self, flags: &GlobalFlags) -> u32 {
        flags.limit.unwrap_or(self.config.general.default_limit)
    }
}
