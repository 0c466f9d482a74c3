/// Post handlers - HTTP endpoints for post operations
use crate::error::Result;
use crate::middleware::upload::read_post_form;
use crate::middleware::CurrentUser;
use crate::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};

/// Create a post from a multipart form (`image` file + `caption`)
///
/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    user: CurrentUser,
    payload: Multipart,
) -> Result<HttpResponse> {
    let form = read_post_form(payload, state.max_upload_bytes).await?;

    let post = state
        .post_service()
        .create_post(&user.0, form.caption, form.image)
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// List every post, creator populated, newest first
///
/// GET /api/posts
pub async fn get_all_posts(state: web::Data<AppState>) -> Result<HttpResponse> {
    let posts = state.post_service().get_all_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}
