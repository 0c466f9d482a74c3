/// Authentication handlers
use crate::error::Result;
use crate::models::{LoginRequest, RegisterRequest};
use crate::AppState;
use actix_web::{web, HttpResponse};

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    let response = state.auth_service().register(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let response = state.auth_service().login(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
