pub mod github;

pub use github::{GitHubClient, GitHubError};
