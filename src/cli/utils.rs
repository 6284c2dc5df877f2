//! Shared CLI utilities.

use crate::config::load_config;
use crate::domain::Config;
use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from `--config` or the working directory.
pub fn resolve_config(config_path: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir().context("Failed to read the working directory")?;
    load_config(&cwd, config_path)
}

/// Pick the branch to list: explicit flag first, then the configured primary branch.
pub fn resolve_branch(flag: Option<&str>, config: &Config) -> String {
    flag.map(str::trim)
        .filter(|b| !b.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| config.primary_branch.clone())
}
