//! Report command implementation

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use super::utils::resolve_branch;
use crate::analysis::analyze;
use crate::domain::{Config, RepoId, RepoMetadata};
use crate::fetch::{GitHubClient, Listing};
use crate::render::{build_report, render_console_report, write_report, ReportInput};
use crate::scan::{build_tree, render_tree};

#[derive(Args)]
pub struct ReportArgs {
    /// The repository to inspect, in 'owner/name' format
    #[arg(value_name = "REPO")]
    pub repo: String,

    /// Branch to list (defaults to the configured primary branch)
    #[arg(short, long, value_name = "BRANCH")]
    pub branch: Option<String>,

    /// Print the report as JSON instead of the console summary
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON report to this file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Append the reconstructed directory tree, limited to this many levels
    #[arg(long, value_name = "DEPTH")]
    pub tree_depth: Option<usize>,

    /// Number of languages to list
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Omit generated_at from the JSON report
    #[arg(long)]
    pub no_timestamp: bool,
}

pub fn run(args: ReportArgs, config: &Config) -> Result<()> {
    // Validate before touching the network.
    let repo = RepoId::parse(&args.repo)?;
    let branch = resolve_branch(args.branch.as_deref(), config);
    let client = GitHubClient::new(config);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(create_spinner_style()?);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let fetched = fetch_inputs(&client, &repo, &branch, &spinner);
    let Some((metadata, listing)) = fetched else {
        spinner.finish_and_clear();
        anyhow::bail!(
            "Could not retrieve data for {repo}.\n   \
             - Check if the repository is public and the name is correct.\n   \
             - The default branch might not be '{}' or '{}'.",
            config.primary_branch,
            config.fallback_branch
        );
    };
    let entries = &listing.entries;

    spinner.set_message("Analyzing codebase from afar...");
    let analysis = analyze(entries);
    let tree = build_tree(entries);
    spinner.finish_and_clear();

    tracing::debug!(
        files = tree.file_count(),
        directories = tree.dir_count(),
        "Reconstructed tree for {}",
        repo
    );

    if args.json || args.output.is_some() {
        let report = build_report(
            &ReportInput {
                repo: &repo,
                branch: &listing.branch,
                metadata: &metadata,
                analysis: &analysis,
                tree: &tree,
                entry_count: entries.len(),
            },
            !args.no_timestamp,
        )?;
        if let Some(path) = &args.output {
            write_report(path, &report)?;
            eprintln!("Report written to {}", path.display());
        }
        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }
    }

    let top = args.top.unwrap_or(config.top_languages);
    println!("{}", render_console_report(&repo, &metadata, &analysis, top));

    if let Some(depth) = args.tree_depth {
        println!("\n{}", render_tree(&tree, &repo.name, depth));
    }

    Ok(())
}

/// Metadata and a non-empty listing, or `None` when either is unavailable.
fn fetch_inputs(
    client: &GitHubClient,
    repo: &RepoId,
    branch: &str,
    spinner: &ProgressBar,
) -> Option<(RepoMetadata, Listing)> {
    spinner.set_message("Fetching repository metadata...");
    let metadata = client.fetch_metadata(repo);

    spinner.set_message("Fetching file structure...");
    let listing = client.fetch_listing(repo, branch).filter(|l| !l.entries.is_empty());

    Some((metadata?, listing?))
}

fn create_spinner_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")?)
}
