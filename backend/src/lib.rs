//! Portfolio relay
//!
//! Serves a trimmed-down view of one GitHub account to a portfolio site,
//! calling the GitHub REST API server-side with a private token.

use actix_cors::Cors;
use actix_web::http::header;

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use services::{GitHubClient, GitHubError};

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub github: GitHubClient,
}

/// CORS policy: configured origins only, GET/POST, JSON and auth headers.
pub fn cors(config: &Config) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
}
