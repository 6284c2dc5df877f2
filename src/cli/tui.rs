//! Tui command implementation

use anyhow::Result;
use clap::Args;

use super::utils::resolve_branch;
use crate::domain::Config;
use crate::fetch::GitHubClient;

#[derive(Args)]
pub struct TuiArgs {
    /// The repository to explore, in 'owner/name' format
    #[arg(value_name = "REPO")]
    pub repo: String,

    /// Branch to list (defaults to the configured primary branch)
    #[arg(short, long, value_name = "BRANCH")]
    pub branch: Option<String>,
}

/// A malformed repository is reported inside the view, not as an exit code.
pub fn run(args: TuiArgs, config: &Config) -> Result<()> {
    let branch = resolve_branch(args.branch.as_deref(), config);
    crate::tui::run(GitHubClient::new(config), args.repo, branch)
}
