//! GitHub REST client for repository metadata and recursive path listings

use crate::domain::{Config, Entry, EntryKind, RepoId, RepoMetadata};
use crate::fetch::transport::{FetchError, Transport, UreqTransport};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
struct TreeResponse {
    tree: Option<Vec<TreeItem>>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Debug, Deserialize)]
struct TreeItem {
    path: String,
    #[serde(rename = "type")]
    kind: String,
}

/// A recursive listing together with the branch that served it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub branch: String,
    pub entries: Vec<Entry>,
}

pub struct GitHubClient {
    transport: Box<dyn Transport>,
    api_base_url: String,
    primary_branch: String,
    fallback_branch: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Self {
        let transport = UreqTransport::new(
            Duration::from_secs(config.timeout_secs),
            config.user_agent.clone(),
        );
        Self::with_transport(config, Box::new(transport))
    }

    pub fn with_transport(config: &Config, transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            primary_branch: config.primary_branch.clone(),
            fallback_branch: config.fallback_branch.clone(),
        }
    }

    /// Best-effort metadata fetch. No retry.
    pub fn fetch_metadata(&self, repo: &RepoId) -> Option<RepoMetadata> {
        let url = format!("{}/repos/{}/{}", self.api_base_url, repo.owner, repo.name);
        let value = match self.transport.get_json(&url) {
            Ok(value) => value,
            Err(e) => {
                warn!("Metadata request failed: {}", e);
                return None;
            }
        };
        match serde_json::from_value(value) {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                warn!("Unexpected metadata payload from {}: {}", url, e);
                None
            }
        }
    }

    /// Fetch the recursive listing for `branch`.
    ///
    /// An HTTP status failure on the primary branch is retried once against the
    /// fallback branch. Transport failures and failures on any other branch are
    /// final. `None` means no listing could be obtained.
    pub fn fetch_listing(&self, repo: &RepoId, branch: &str) -> Option<Listing> {
        match self.request_listing(repo, branch) {
            Ok(listing) => listing,
            Err(e) if e.is_status() && self.should_fall_back(branch) => {
                info!(
                    "Listing for branch '{}' failed ({}); retrying with '{}'",
                    branch, e, self.fallback_branch
                );
                match self.request_listing(repo, &self.fallback_branch) {
                    Ok(listing) => listing,
                    Err(e) => {
                        warn!("Listing request failed: {}", e);
                        None
                    }
                }
            }
            Err(e) => {
                warn!("Listing request failed: {}", e);
                None
            }
        }
    }

    fn should_fall_back(&self, branch: &str) -> bool {
        branch == self.primary_branch && self.fallback_branch != self.primary_branch
    }

    /// `Ok(None)` when the response decoded but carried no listing.
    fn request_listing(
        &self,
        repo: &RepoId,
        branch: &str,
    ) -> Result<Option<Listing>, FetchError> {
        let url = format!(
            "{}/repos/{}/{}/git/trees/{}?recursive=1",
            self.api_base_url, repo.owner, repo.name, branch
        );
        debug!("GET {}", url);
        let value = self.transport.get_json(&url)?;

        let response: TreeResponse = match serde_json::from_value(value) {
            Ok(response) => response,
            Err(e) => {
                warn!("Unexpected listing payload from {}: {}", url, e);
                return Ok(None);
            }
        };
        let Some(items) = response.tree else {
            warn!("Listing response from {} has no tree field", url);
            return Ok(None);
        };
        if response.truncated {
            warn!("Listing for {} on '{}' was truncated by the server", repo, branch);
        }

        let entries = items
            .into_iter()
            .filter_map(|item| match EntryKind::from_wire_tag(&item.kind) {
                Some(kind) => Some(Entry { path: item.path, kind }),
                None => {
                    debug!("Ignoring '{}' entry: {}", item.kind, item.path);
                    None
                }
            })
            .collect();
        Ok(Some(Listing { branch: branch.to_string(), entries }))
    }
}
