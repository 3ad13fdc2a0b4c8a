use std::path::PathBuf;

use anyhow::{Context, Result};

use super::args::Arguments;
use crate::changelog::generate_changelog;
use crate::config::Config;
use crate::github::GithubClient;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub line_count: usize,
    pub pull_request_count: usize,
    pub output_path: PathBuf,
}

/// Main entry point for a changelog run.
///
/// Builds the GitHub client from `config` and writes the changelog for
/// `args.base`..`args.head` to the configured output path.
///
/// # Returns
/// - `Ok(RunSummary)` describing what was written
/// - `Err` if the comparison, a pull request lookup or the write fails
pub fn run(args: &Arguments, config: &Config) -> Result<RunSummary> {
    log::info!(
        "Running sanitizer on {} between HEAD: {} and BASE: {}",
        config.repository,
        args.head,
        args.base
    );
    log::debug!("{:?}", config);

    let client = GithubClient::new(config).context("Failed to create GitHub client")?;
    let output_path = config.output_path();
    let lines = generate_changelog(&client, &client, &args.base, &args.head, output_path)?;

    Ok(RunSummary {
        line_count: lines.len(),
        pull_request_count: lines.iter().filter(|line| line.is_pull_request()).count(),
        output_path: output_path.to_path_buf(),
    })
}
