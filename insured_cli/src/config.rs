use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const EXPORT_DIR_VAR: &str = "INSURED_EXPORT_DIR";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const DEFAULT_LOG_FILTER: &str = "WARN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Folders entered in the export dialog are resolved against this directory.
    pub export_dir: PathBuf,
    pub log_filter: String,
}

impl AppConfig {
    /// Loads `KEY=value` pairs from `env_file` into the process environment, if the file exists.
    pub fn load_env_file(env_file: &Path) -> Result<()> {
        if env_file.exists() {
            dotenv::from_path(env_file)
                .with_context(|| format!("Failed env file loading {:?}", env_file))?;
        }
        Ok(())
    }

    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let export_dir = var(EXPORT_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        AppConfig {
            export_dir,
            log_filter: var(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}
