use crate::middleware::CurrentUser;
use actix_web::HttpResponse;

/// GET /api/users/me
pub async fn me(user: CurrentUser) -> HttpResponse {
    HttpResponse::Ok().json(user.0)
}
