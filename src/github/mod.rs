//! GitHub REST API backend for the commit source and title lookup.

mod client;
pub mod types;

pub use client::{GithubClient, GithubError};
