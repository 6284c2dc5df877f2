//! Core domain types shared across fetching, tree building, analysis and rendering.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Kind of a path in a repository listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Map a listing `type` tag to an entry kind.
    ///
    /// `blob` is a file and `tree` a directory; anything else (submodule
    /// `commit` entries, for instance) has no kind.
    pub fn from_wire_tag(tag: &str) -> Option<Self> {
        match tag {
            "blob" => Some(EntryKind::File),
            "tree" => Some(EntryKind::Directory),
            _ => None,
        }
    }
}

/// One flat record of a repository listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Repository-root-relative, `/`-separated path
    pub path: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn file(path: impl Into<String>) -> Self {
        Self { path: path.into(), kind: EntryKind::File }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self { path: path.into(), kind: EntryKind::Directory }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoIdError {
    #[error("Invalid repository format '{0}'. Please use 'owner/repo'.")]
    InvalidFormat(String),
}

/// A repository identifier in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    /// Parse `owner/name`. Exactly one `/` is required and neither half may be empty.
    pub fn parse(value: &str) -> Result<Self, RepoIdError> {
        let trimmed = value.trim();
        let mut parts = trimmed.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self { owner: owner.to_string(), name: name.to_string() })
            }
            _ => Err(RepoIdError::InvalidFormat(value.to_string())),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// General repository metadata (stars, forks, description).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoMetadata {
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    /// Branch tried first; the only branch allowed to fall back
    pub primary_branch: String,
    pub fallback_branch: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Number of languages shown in the report
    pub top_languages: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            primary_branch: "main".to_string(),
            fallback_branch: "master".to_string(),
            timeout_secs: 10,
            user_agent: format!("git-seer/{}", env!("CARGO_PKG_VERSION")),
            top_languages: 5,
        }
    }
}
