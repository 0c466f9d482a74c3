use crate::error::{AppError, Result};
use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
    version: &'static str,
}

/// Liveness probe, no dependency checks
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK",
        message: "Backend running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Fallback for paths no route matches
pub async fn not_found() -> Result<HttpResponse> {
    Err(AppError::NotFound("Route not found".to_string()))
}
