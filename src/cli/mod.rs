//! Command-line interface for git-seer
//!
//! Provides `report` and `tui` subcommands for a remote repository.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod report;
mod tui;
mod utils;

/// Get a high-level overview of a GitHub repository without cloning it
#[derive(Parser)]
#[command(name = "git-seer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (TOML or YAML); discovered in the working directory when omitted
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a one-shot overview report
    Report(report::ReportArgs),

    /// Browse the repository tree interactively
    Tui(tui::TuiArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, Commands::Tui(_));
    init_tracing(cli.verbose, interactive);

    let config = utils::resolve_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Report(args) => report::run(args, &config),
        Commands::Tui(args) => tui::run(args, &config),
    }
}

/// Wire verbose flag to the tracing log level.
///
/// RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
/// The interactive view owns the terminal, so its logs go to `GIT_SEER_LOG` or nowhere.
fn init_tracing(verbose: bool, interactive: bool) {
    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    if !interactive {
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .try_init();
        return;
    }

    let log_file = std::env::var_os("GIT_SEER_LOG").and_then(|path| {
        std::fs::OpenOptions::new().create(true).append(true).open(path).ok()
    });
    match log_file {
        Some(file) => {
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(std::sync::Mutex::new(file)))
                .with(filter)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::sink))
                .with(filter)
                .try_init();
        }
    }
}
