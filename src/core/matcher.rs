//! Detection of merge commits created by GitHub's "Merge pull request" button.

use std::num::NonZeroU64;
use std::sync::LazyLock;

use regex::Regex;

use super::PullNumber;
use crate::error::PatternError;

/// Literal prefix GitHub writes at the start of a merge commit message.
pub const MERGE_PREFIX: &str = "Merge pull request #";

static MERGE_REQUEST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("{}([0-9]+)", regex::escape(MERGE_PREFIX))).unwrap());

/// Extract the pull request number from a merge commit message.
///
/// The pattern is searched anywhere in the message, not only at its start.
///
/// # Returns
/// - `Ok(Some(number))` when the message references a pull request
/// - `Ok(None)` when the message is not an automatic merge
/// - `Err(PatternError)` when the digits after the prefix are not a valid
///   positive number (zero, or too large to fit)
pub fn parse_pull_number(message: &str) -> Result<Option<PullNumber>, PatternError> {
    let Some(captures) = MERGE_REQUEST_REGEX.captures(message) else {
        return Ok(None);
    };
    let digits = &captures[1];

    digits
        .parse::<NonZeroU64>()
        .map(|n| Some(PullNumber::from(n)))
        .map_err(|source| PatternError::InvalidNumber {
            digits: digits.to_string(),
            source,
        })
}
