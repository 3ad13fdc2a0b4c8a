//! prlog - changelog generator for GitHub repositories
//!
//! prlog compares two revisions of a repository and writes one numbered line
//! per commit to `CHANGELOG.md`. Commits created by GitHub's "Merge pull
//! request" button are replaced by the title of the pull request they merged.
//!
//! ## Module Structure
//!
//! - `changelog`: Changelog file output
//! - `cli`: Command-line interface layer
//! - `config`: Run configuration resolved from the environment
//! - `core`: Merge commit detection and commit-to-line resolution
//! - `error`: Error types
//! - `github`: GitHub REST API client

pub mod changelog;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod github;
