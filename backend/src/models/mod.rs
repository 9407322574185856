pub mod github;

pub use github::{
    CreateIssueRequest, GitHubIssue, GitHubRepo, GitHubUser, IssueCreationResult, NewIssue,
    RepoDetail, RepoSummary, UserSummary,
};
