use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{ApiErrorBody, CommitsComparison, PullRequest};
use crate::config::{Config, Repository, TOKEN_ENV};
use crate::core::{CommitSource, Comparison, PullNumber, TitleLookup};
use crate::error::BoxError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const API_VERSION: &str = "2022-11-28";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GITHUB_API_TOKEN is not a valid header value")]
    InvalidToken,

    #[error("invalid GitHub API URL \"{url}\": {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("not found: {url}")]
    NotFound { url: String },

    #[error("API rate limit exceeded, export GITHUB_API_TOKEN for higher limits")]
    RateLimited,

    #[error("GitHub responded with {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("requested PR {requested} but GitHub returned PR #{received}")]
    UnexpectedPullRequest { requested: PullNumber, received: u64 },
}

/// Blocking GitHub REST client bound to a single repository.
#[derive(Debug)]
pub struct GithubClient {
    http: Client,
    api_url: Url,
    repository: Repository,
}

impl GithubClient {
    pub fn new(config: &Config) -> Result<Self, GithubError> {
        let api_url = parse_api_url(&config.api_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            HeaderName::from_static("x-github-api-version"),
            HeaderValue::from_static(API_VERSION),
        );

        match &config.token {
            Some(token) => {
                log::info!("{TOKEN_ENV} provided. Creating authenticated client.");
                let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                    .map_err(|_| GithubError::InvalidToken)?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            None => {
                log::warn!("{TOKEN_ENV} not provided. Creating unauthenticated client.");
                log::warn!(
                    "Export {TOKEN_ENV} to get an authenticated client with higher rate limits"
                );
            }
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_url,
            repository: config.repository,
        })
    }

    /// Compare two revisions of the repository.
    ///
    /// `base...head` is sent as a single percent-encoded path segment, so
    /// revisions containing `#`, `?` or `/` reach GitHub intact.
    pub fn compare_commits(&self, base: &str, head: &str) -> Result<Comparison, GithubError> {
        let basehead = format!("{base}...{head}");
        let comparison: CommitsComparison = self.get(&["compare", &basehead])?;
        Ok(comparison.into())
    }

    /// Fetch a single pull request of the repository.
    pub fn pull_request(&self, number: PullNumber) -> Result<PullRequest, GithubError> {
        let pull_request: PullRequest = self.get(&["pulls", &number.get().to_string()])?;
        if pull_request.number != number.get() {
            return Err(GithubError::UnexpectedPullRequest {
                requested: number,
                received: pull_request.number,
            });
        }
        Ok(pull_request)
    }

    fn repo_url(&self, segments: &[&str]) -> Url {
        let mut url = self.api_url.clone();
        // `parse_api_url` only accepts URLs that can be a base.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(["repos", self.repository.owner, self.repository.name])
                .extend(segments);
        }
        url
    }

    fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, GithubError> {
        let url = self.repo_url(segments);
        log::debug!("GET {url}");

        let response = self.http.get(url.clone()).send()?;
        let response = check_status(response, url)?;
        Ok(response.json()?)
    }
}

fn parse_api_url(raw: &str) -> Result<Url, GithubError> {
    let invalid = |reason: String| GithubError::InvalidApiUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("not a hierarchical URL".to_string()));
    }
    Ok(url)
}

fn check_status(response: Response, url: Url) -> Result<Response, GithubError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(GithubError::NotFound {
            url: url.to_string(),
        });
    }
    if is_rate_limited(&response) {
        return Err(GithubError::RateLimited);
    }

    let message = response
        .json::<ApiErrorBody>()
        .map(|body| body.message)
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown error").to_string());
    Err(GithubError::Status { status, message })
}

fn is_rate_limited(response: &Response) -> bool {
    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return true;
    }

    status == StatusCode::FORBIDDEN
        && response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<u32>().ok())
            == Some(0)
}

impl CommitSource for GithubClient {
    fn compare(&self, base: &str, head: &str) -> Result<Comparison, BoxError> {
        Ok(self.compare_commits(base, head)?)
    }
}

impl TitleLookup for GithubClient {
    fn pull_request_title(&self, number: PullNumber) -> Result<String, BoxError> {
        Ok(self.pull_request(number)?.title)
    }
}
