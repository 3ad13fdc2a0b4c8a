//! Error types for a changelog run.
//!
//! Every variant of [`SanitizeError`] is fatal: the run stops and no changelog
//! is written. [`PatternError`] is the only recoverable error and never leaves
//! the resolver.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::PullNumber;

/// Boxed error returned by the external collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum SanitizeError {
    #[error("could not fetch the list of commits for HEAD: {head} and BASE: {base}")]
    Comparison {
        base: String,
        head: String,
        #[source]
        source: BoxError,
    },

    #[error("no commits found between HEAD: {head} and BASE: {base}")]
    EmptyComparison { base: String, head: String },

    #[error("could not fetch PR {number}")]
    Lookup {
        number: PullNumber,
        #[source]
        source: BoxError,
    },

    #[error("could not write changelog to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A commit message matched the merge pattern but its number is unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("matched merge pattern but could not convert \"{digits}\" to a pull request number")]
    InvalidNumber {
        digits: String,
        #[source]
        source: ParseIntError,
    },
}
