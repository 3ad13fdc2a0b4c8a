//! Response bodies of the GitHub REST endpoints used by the client.

use serde::Deserialize;

use crate::core::{CommitRecord, Comparison};

/// `GET /repos/{owner}/{repo}/compare/{base}...{head}`
#[derive(Debug, Deserialize)]
pub struct CommitsComparison {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub ahead_by: u64,
    #[serde(default)]
    pub behind_by: u64,
    #[serde(default)]
    pub total_commits: u64,
    #[serde(default)]
    pub commits: Vec<RepositoryCommit>,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryCommit {
    pub sha: String,
    pub commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
pub struct CommitDetail {
    pub message: String,
}

/// `GET /repos/{owner}/{repo}/pulls/{number}`
#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
}

/// Error body GitHub returns alongside non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

impl From<CommitsComparison> for Comparison {
    fn from(value: CommitsComparison) -> Self {
        Self {
            status: value.status,
            ahead_by: value.ahead_by,
            behind_by: value.behind_by,
            total_commits: value.total_commits,
            commits: value
                .commits
                .into_iter()
                .map(|c| CommitRecord::new(c.sha, c.commit.message))
                .collect(),
        }
    }
}
