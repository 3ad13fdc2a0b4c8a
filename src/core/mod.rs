//! Core changelog logic, independent of GitHub and of the filesystem.
//!
//! - `commit`: data types shared by every stage
//! - `matcher`: detection of "Merge pull request #N" commits
//! - `resolve`: commit fetching and commit-to-line resolution

mod commit;
pub mod matcher;
pub mod resolve;

pub use commit::*;
pub use matcher::parse_pull_number;
pub use resolve::{fetch_commits, resolve};

use crate::error::BoxError;

/// Source of the commits between two revisions.
pub trait CommitSource {
    /// Compare `base` with `head`, returning the commits reachable from `head`
    /// but not from `base`, oldest first.
    fn compare(&self, base: &str, head: &str) -> Result<Comparison, BoxError>;
}

/// Lookup of pull request titles by number.
pub trait TitleLookup {
    fn pull_request_title(&self, number: PullNumber) -> Result<String, BoxError>;
}
