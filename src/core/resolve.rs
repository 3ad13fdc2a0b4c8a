//! Resolution of commits into changelog lines.
//!
//! Each commit becomes exactly one [`DisplayLine`] at the same position.
//! Automatic merges are replaced by the title of the pull request they merged,
//! everything else keeps its raw commit message.

use super::matcher::{MERGE_PREFIX, parse_pull_number};
use super::{CommitRecord, CommitSource, Comparison, DisplayLine, LineSource, TitleLookup};
use crate::error::SanitizeError;

/// Fetch the commits reachable from `head` but not from `base`.
///
/// Fails when the comparison cannot be performed or when it contains no
/// commits at all.
pub fn fetch_commits<S>(
    source: &S,
    base: &str,
    head: &str,
) -> Result<Vec<CommitRecord>, SanitizeError>
where
    S: CommitSource + ?Sized,
{
    let comparison = source
        .compare(base, head)
        .map_err(|source| SanitizeError::Comparison {
            base: base.to_string(),
            head: head.to_string(),
            source,
        })?;
    log_comparison(&comparison);

    if comparison.commits.is_empty() {
        return Err(SanitizeError::EmptyComparison {
            base: base.to_string(),
            head: head.to_string(),
        });
    }

    Ok(comparison.commits)
}

/// Turn commits into numbered changelog lines, in input order.
///
/// A failed title lookup aborts the whole pass: no lines are returned and the
/// remaining commits are not looked at.
pub fn resolve<L>(
    commits: &[CommitRecord],
    lookup: &L,
) -> Result<Vec<DisplayLine>, SanitizeError>
where
    L: TitleLookup + ?Sized,
{
    log::info!("Searching for PRs that begin with \"{MERGE_PREFIX}\"");

    commits
        .iter()
        .enumerate()
        .map(|(index, commit)| resolve_commit(index, commit, lookup))
        .collect()
}

fn resolve_commit<L>(
    index: usize,
    commit: &CommitRecord,
    lookup: &L,
) -> Result<DisplayLine, SanitizeError>
where
    L: TitleLookup + ?Sized,
{
    let number = match parse_pull_number(&commit.message) {
        Ok(Some(number)) => number,
        Ok(None) => {
            log::debug!(
                "Probably merged by a human, keeping commit message. SHA: {}",
                commit.sha
            );
            return Ok(raw_line(index, commit));
        }
        Err(err) => {
            log::warn!("{err}, keeping commit message. SHA: {}", commit.sha);
            return Ok(raw_line(index, commit));
        }
    };

    log::info!("Automatic merge found. Fetching PR {number}");
    let title = lookup
        .pull_request_title(number)
        .map_err(|source| SanitizeError::Lookup { number, source })?;

    Ok(DisplayLine {
        index,
        text: title,
        source: LineSource::PullRequest(number),
    })
}

fn raw_line(index: usize, commit: &CommitRecord) -> DisplayLine {
    DisplayLine {
        index,
        text: commit.message.clone(),
        source: LineSource::Commit,
    }
}

fn log_comparison(comparison: &Comparison) {
    log::info!("Status: {}", comparison.status);
    log::info!("Ahead by: {}", comparison.ahead_by);
    log::info!("Behind by: {}", comparison.behind_by);
    log::info!("Total commits: {}", comparison.total_commits);
}
