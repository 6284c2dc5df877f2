//! Background fetch for the interactive view.

use crate::domain::RepoId;
use crate::fetch::GitHubClient;
use crate::scan::build_tree;
use crate::tui::app::WorkerMessage;
use crossbeam_channel::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Fetch and build the tree on a worker thread, handing the result back over `tx`.
pub fn spawn_fetch(
    client: Arc<GitHubClient>,
    repo_spec: String,
    branch: String,
    tx: Sender<WorkerMessage>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let message = load_tree(&client, &repo_spec, &branch);
        // The UI may already be gone; nothing left to report to.
        let _ = tx.send(message);
    })
}

pub fn load_tree(client: &GitHubClient, repo_spec: &str, branch: &str) -> WorkerMessage {
    let repo = match RepoId::parse(repo_spec) {
        Ok(repo) => repo,
        Err(e) => {
            tracing::warn!("{}", e);
            return WorkerMessage::Failed("Invalid repo format.".to_string());
        }
    };

    match client.fetch_listing(&repo, branch) {
        Some(listing) if !listing.entries.is_empty() => {
            tracing::debug!(
                "Building tree from {} entries on '{}'",
                listing.entries.len(),
                listing.branch
            );
            WorkerMessage::Loaded(build_tree(&listing.entries))
        }
        Some(_) => WorkerMessage::Failed(format!("Repository {} has no files.", repo)),
        None => WorkerMessage::Failed(format!("Could not load repository: {}", repo)),
    }
}
