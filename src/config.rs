use std::{
    env, fmt,
    path::{Path, PathBuf},
};

pub const TOKEN_ENV: &str = "GITHUB_API_TOKEN";
pub const API_URL_ENV: &str = "GITHUB_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const CHANGELOG_PATH: &str = "./CHANGELOG.md";

/// Repository the changelog is generated for.
pub const REPOSITORY: Repository = Repository {
    owner: "apple",
    name: "swift",
};

/// Owner and name of a GitHub repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repository {
    pub owner: &'static str,
    pub name: &'static str,
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Whether requests carry a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Authenticated,
    Anonymous,
}

/// Settings for a single run, resolved once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub repository: Repository,
    pub token: Option<String>,
    pub api_url: String,
    pub output_path: PathBuf,
}

impl Config {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_url = non_empty(API_URL_ENV)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            repository: REPOSITORY,
            token: non_empty(TOKEN_ENV),
            api_url,
            output_path: PathBuf::from(CHANGELOG_PATH),
        }
    }

    pub fn auth_mode(&self) -> AuthMode {
        if self.token.is_some() {
            AuthMode::Authenticated
        } else {
            AuthMode::Anonymous
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

// The token must never end up in logs or panic messages.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("repository", &self.repository)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("output_path", &self.output_path)
            .finish()
    }
}
