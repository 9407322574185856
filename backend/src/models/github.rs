//! GitHub models
//!
//! Upstream payload shapes (only the fields the relay reads) and the narrowed
//! shapes returned to the browser. Each outbound shape is built by an explicit
//! projection from its upstream counterpart.

use serde::{Deserialize, Serialize};

/// User profile as returned by `GET /users/{username}`
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
}

/// Repository object as returned by the repo list and single-repo endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub created_at: String,
    pub updated_at: String,
}

/// Issue object as returned by `POST /repos/{owner}/{repo}/issues`
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubIssue {
    pub html_url: String,
}

/// Body sent upstream to open an issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
}

/// Inbound request body for issue creation
///
/// Both fields are optional here so that absence is reported as a validation
/// failure rather than a deserialization one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateIssueRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl CreateIssueRequest {
    /// Returns the upstream issue body, or `None` if title or body is missing or empty.
    pub fn into_new_issue(self) -> Option<NewIssue> {
        let title = self.title.filter(|t| !t.is_empty())?;
        let body = self.body.filter(|b| !b.is_empty())?;
        Some(NewIssue { title, body })
    }
}

/// Repository entry in the account overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSummary {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub stars: u64,
    pub forks: u64,
}

impl From<&GitHubRepo> for RepoSummary {
    fn from(repo: &GitHubRepo) -> Self {
        Self {
            name: repo.name.clone(),
            description: repo.description.clone(),
            url: repo.html_url.clone(),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
        }
    }
}

/// Single repository view, timestamps passed through as upstream formats them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoDetail {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub stars: u64,
    pub forks: u64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&GitHubRepo> for RepoDetail {
    fn from(repo: &GitHubRepo) -> Self {
        Self {
            name: repo.name.clone(),
            description: repo.description.clone(),
            url: repo.html_url.clone(),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            created_at: repo.created_at.clone(),
            updated_at: repo.updated_at.clone(),
        }
    }
}

/// Account overview: profile counters plus every listed repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub repositories: Vec<RepoSummary>,
}

impl UserSummary {
    /// Combine a profile with its repository list, keeping upstream order.
    pub fn project(user: &GitHubUser, repos: &[GitHubRepo]) -> Self {
        Self {
            followers: user.followers,
            following: user.following,
            public_repos: user.public_repos,
            repositories: repos.iter().map(RepoSummary::from).collect(),
        }
    }
}

/// Result of opening an issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreationResult {
    pub issue_url: String,
}

impl From<&GitHubIssue> for IssueCreationResult {
    fn from(issue: &GitHubIssue) -> Self {
        Self {
            issue_url: issue.html_url.clone(),
        }
    }
}
