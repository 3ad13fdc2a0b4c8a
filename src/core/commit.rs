use std::fmt;
use std::num::NonZeroU64;

/// A single commit between two revisions, as reported by the commit source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub sha: String,
    pub message: String,
}

impl CommitRecord {
    pub fn new(sha: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            message: message.into(),
        }
    }
}

/// Pull request number extracted from a merge commit message.
///
/// Always positive: GitHub never hands out `#0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PullNumber(NonZeroU64);

impl PullNumber {
    pub fn new(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl From<NonZeroU64> for PullNumber {
    fn from(value: NonZeroU64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PullNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the text of a [`DisplayLine`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSource {
    /// Raw commit message, kept verbatim.
    Commit,
    /// Title of the pull request the merge commit points at.
    PullRequest(PullNumber),
}

/// One changelog line: the commit's position in the comparison plus its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub index: usize,
    pub text: String,
    pub source: LineSource,
}

impl DisplayLine {
    pub fn is_pull_request(&self) -> bool {
        matches!(self.source, LineSource::PullRequest(_))
    }
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LINE {}: {}", self.index, self.text)
    }
}

/// Result of comparing two revisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub status: String,
    pub ahead_by: u64,
    pub behind_by: u64,
    pub total_commits: u64,
    pub commits: Vec<CommitRecord>,
}
