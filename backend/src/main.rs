use actix_web::{middleware, web, App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_relay::handlers;
use portfolio_relay::{AppState, Config, GitHubClient};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_relay=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let github = GitHubClient::from_config(&config).map_err(|e| {
        error!("Failed to build GitHub client: {}", e);
        std::io::Error::other(e)
    })?;

    info!(
        "Relaying GitHub data for {} via {}",
        config.github_username, config.github_api_url
    );
    info!("Allowed origins: {}", config.allowed_origins.join(", "));

    let server_addr = format!("{}:{}", config.host, config.port);

    let app_state = web::Data::new(AppState {
        config: config.clone(),
        github,
    });

    info!("Server is running at {}", server_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(portfolio_relay::cors(&app_state.config))
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .configure(handlers::configure_root_routes)
            .configure(handlers::configure_github_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
