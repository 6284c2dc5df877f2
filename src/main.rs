//! git-seer: a high-level overview of a GitHub repository without cloning it
//!
//! Fetches the repository's flat path listing, rebuilds the directory tree and
//! runs heuristic passes for languages, structure, manifests and risky paths.

use anyhow::Result;

mod analysis;
mod cli;
mod config;
mod domain;
mod fetch;
mod render;
mod scan;
mod tui;
mod utils;

fn main() -> Result<()> {
    cli::run()
}
