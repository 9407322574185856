//! GitHub API client
//!
//! Thin wrapper over `reqwest` for the four upstream endpoints the relay uses.
//! Every request carries the configured token; responses are decoded into the
//! upstream model types without any reshaping.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::models::{GitHubIssue, GitHubRepo, GitHubUser, NewIssue};

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("portfolio-relay/", env!("CARGO_PKG_VERSION"));

/// Errors raised while talking to the upstream API
#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    /// Connection, timeout or TLS failure
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Upstream answered with a non-2xx status
    #[error("Upstream returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    /// Upstream body did not match the expected shape
    #[error("Malformed upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GitHubError {
    /// Upstream status code, if the failure came with one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            Self::Decode(_) => None,
        }
    }
}

/// Client for the upstream GitHub-compatible API
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
    token: String,
}

impl GitHubClient {
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self, GitHubError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, GitHubError> {
        Self::new(
            &config.github_api_url,
            &config.github_token,
            Duration::from_secs(config.github_timeout_secs),
        )
    }

    /// GET /users/{username}
    pub async fn get_user(&self, username: &str) -> Result<GitHubUser, GitHubError> {
        let url = self.url(&["users", username]);
        self.send(self.http.get(url)).await
    }

    /// GET /users/{username}/repos
    pub async fn list_repos(&self, username: &str) -> Result<Vec<GitHubRepo>, GitHubError> {
        let url = self.url(&["users", username, "repos"]);
        self.send(self.http.get(url)).await
    }

    /// GET /repos/{owner}/{repo}
    pub async fn get_repo(&self, owner: &str, repo: &str) -> Result<GitHubRepo, GitHubError> {
        let url = self.url(&["repos", owner, repo]);
        self.send(self.http.get(url)).await
    }

    /// POST /repos/{owner}/{repo}/issues
    pub async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        issue: &NewIssue,
    ) -> Result<GitHubIssue, GitHubError> {
        let url = self.url(&["repos", owner, repo, "issues"]);
        self.send(self.http.post(url).json(issue)).await
    }

    fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, GitHubError> {
        let request = request
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .build()?;

        debug!(method = %request.method(), url = %request.url(), "Calling upstream");

        let response = self.http.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GitHubError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
