//! GitHub handlers
//!
//! HTTP handlers relaying account, repository and issue operations to the
//! upstream API for the configured account.

use actix_web::{web, HttpResponse};
use tracing::{debug, error};

use crate::error::AppError;
use crate::models::{CreateIssueRequest, IssueCreationResult, RepoDetail, UserSummary};
use crate::services::GitHubError;
use crate::AppState;

pub const OVERVIEW_FAILED: &str = "Failed to fetch GitHub data";
pub const REPO_NOT_FOUND: &str = "Repository not found or access denied";
pub const ISSUE_FIELDS_REQUIRED: &str = "Title and body are required";
pub const ISSUE_FAILED: &str = "Failed to create issue";

/// GET /github
///
/// Profile counters and repository list of the configured account.
/// The two upstream calls are independent and run concurrently.
pub async fn get_overview(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let username = &state.config.github_username;

    let (user, repos) = tokio::try_join!(
        state.github.get_user(username),
        state.github.list_repos(username),
    )
    .map_err(map_overview_error)?;

    Ok(HttpResponse::Ok().json(UserSummary::project(&user, &repos)))
}

/// GET /github/{repoName}
///
/// Details of one repository owned by the configured account.
pub async fn get_repo(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let repo_name = path.into_inner();

    let repo = state
        .github
        .get_repo(&state.config.github_username, &repo_name)
        .await
        .map_err(|e| map_repo_error(&repo_name, e))?;

    Ok(HttpResponse::Ok().json(RepoDetail::from(&repo)))
}

/// POST /github/{repoName}/issues
///
/// Open an issue on a repository of the configured account.
/// Title and body are checked before anything is sent upstream.
pub async fn create_issue(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<CreateIssueRequest>,
) -> Result<HttpResponse, AppError> {
    let repo_name = path.into_inner();

    let new_issue = body
        .into_inner()
        .into_new_issue()
        .ok_or_else(|| AppError::Validation(ISSUE_FIELDS_REQUIRED.to_string()))?;

    let issue = state
        .github
        .create_issue(&state.config.github_username, &repo_name, &new_issue)
        .await
        .map_err(|e| map_issue_error(&repo_name, e))?;

    Ok(HttpResponse::Ok().json(IssueCreationResult::from(&issue)))
}

/// Map upstream failures on the overview to application errors
fn map_overview_error(e: GitHubError) -> AppError {
    error!(error = %e, "Failed to fetch GitHub overview");
    AppError::Internal(OVERVIEW_FAILED.to_string())
}

/// Map upstream failures on a repository lookup to application errors.
///
/// Every cause, including outages, is reported to the caller as not found.
fn map_repo_error(repo_name: &str, e: GitHubError) -> AppError {
    error!(repo = %repo_name, status = ?e.status(), error = %e, "Failed to fetch repository");
    AppError::NotFound(REPO_NOT_FOUND.to_string())
}

/// Map upstream failures on issue creation to application errors
fn map_issue_error(repo_name: &str, e: GitHubError) -> AppError {
    error!(repo = %repo_name, status = ?e.status(), error = %e, "Failed to create issue");
    AppError::Internal(ISSUE_FAILED.to_string())
}

/// JSON extractor config for issue creation.
///
/// Unparseable bodies and non-JSON content types get the same 400 as
/// missing fields.
fn issue_json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| {
            debug!(error = %err, "Rejected issue request body");
            AppError::Validation(ISSUE_FIELDS_REQUIRED.to_string()).into()
        })
}

/// Configure GitHub routes
pub fn configure_github_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/github")
            .route("", web::get().to(get_overview))
            .service(
                web::resource("/{repoName}/issues")
                    .app_data(issue_json_config())
                    .route(web::post().to(create_issue)),
            )
            .route("/{repoName}", web::get().to(get_repo)),
    );
}
