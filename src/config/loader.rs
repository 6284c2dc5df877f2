//! Config file discovery and layered loading

use crate::domain::Config;
use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "GIT_SEER_";
const NESTED_SECTION: &str = "git-seer";

pub fn load_config(search_dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Some(path.to_path_buf())
        }
        None => discover_config(search_dir),
    };

    let Some(config_file) = discovered else {
        return extract(None);
    };

    match file_provider(&config_file).and_then(|file| extract(Some(file))) {
        Ok(cfg) => Ok(cfg),
        Err(e) if !config_path_provided => {
            // Auto-discovered: warn and keep going without the file
            tracing::warn!(
                "Failed to load auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            extract(None)
        }
        Err(e) => Err(e),
    }
}

/// Figment for a single config file, focused on a `[git-seer]` section when present.
fn file_provider(config_file: &Path) -> Result<Figment> {
    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let figment = match ext.as_str() {
        "toml" => Figment::from(Toml::file(config_file)),
        "yaml" | "yml" => Figment::from(Yaml::file(config_file)),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    };

    if figment.find_value(NESTED_SECTION).is_ok() {
        Ok(figment.focus(NESTED_SECTION))
    } else {
        Ok(figment)
    }
}

fn extract(file: Option<Figment>) -> Result<Config> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));
    if let Some(file) = file {
        figment = figment.merge(file);
    }
    figment.merge(Env::prefixed(ENV_PREFIX)).extract().context("Invalid configuration")
}

fn discover_config(search_dir: &Path) -> Option<PathBuf> {
    let candidates = [
        "git-seer.toml",
        ".git-seer.toml",
        "git-seer.yaml",
        "git-seer.yml",
        ".git-seer.yaml",
        ".git-seer.yml",
    ];

    candidates.iter().map(|candidate| search_dir.join(candidate)).find(|path| path.exists())
}
