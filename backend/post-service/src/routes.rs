/// Route table: method + path -> handler, with the middleware each scope needs
use crate::handlers;
use crate::metrics;
use crate::middleware::JwtAuthMiddleware;
use crate::AppState;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.app_data(web::Data::new(state.clone()))
        .route("/api/health", web::get().to(handlers::health_check))
        .route("/metrics", web::get().to(metrics::metrics_handler))
        .service(
            web::scope("/api/auth")
                .route("/register", web::post().to(handlers::register))
                .route("/login", web::post().to(handlers::login)),
        )
        .service(
            web::scope("/api/users")
                .wrap(state.auth_middleware())
                .route("/me", web::get().to(handlers::me)),
        )
        .service(
            web::scope("/api/posts")
                .wrap(state.auth_middleware())
                .service(
                    web::resource("")
                        .route(web::post().to(handlers::create_post))
                        .route(web::get().to(handlers::get_all_posts)),
                ),
        )
        .default_service(web::to(handlers::not_found));
}

impl AppState {
    fn auth_middleware(&self) -> JwtAuthMiddleware {
        JwtAuthMiddleware::new(self.jwt.clone(), self.users.clone())
    }
}
