//! Root handlers

use actix_web::{web, HttpResponse};

pub const GREETING: &str = "Welcome, - by Avanishdev.";

/// GET /
pub async fn greet() -> HttpResponse {
    HttpResponse::Ok().json(GREETING)
}

/// Health check endpoint
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "portfolio-relay"
    }))
}

/// Configure root routes
pub fn configure_root_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(greet))
        .route("/health", web::get().to(health_check));
}
