use actix_cors::Cors;
use actix_web::{App, HttpServer};
use post_service::db::{self, PgPostStore, PgUserStore};
use post_service::metrics::MetricsMiddleware;
use post_service::security::JwtKeys;
use post_service::services::S3MediaHost;
use post_service::{routes, telemetry, AppState, Config};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

/// Post Service
///
/// # Routes
///
/// - `/api/auth/*` - register, login
/// - `/api/users/me` - the authenticated user
/// - `/api/posts` - create (multipart image upload) and list posts
/// - `/api/health` - liveness
/// - `/metrics` - Prometheus exposition
///
/// Listens on `PORT` (default 5000).
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init("post-service");

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting post-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let pool = match db::create_pool(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database connection failed: {}", e);
            eprintln!("ERROR: Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };
    db::run_migrations(&pool).await?;

    let media = S3MediaHost::from_config(config.media.clone()).await;

    let state = AppState {
        users: Arc::new(PgUserStore::new(pool.clone())),
        posts: Arc::new(PgPostStore::new(pool)),
        media: Arc::new(media),
        jwt: JwtKeys::new(&config.jwt),
        max_upload_bytes: config.media.max_upload_bytes,
    };

    let bind_address = config.app.bind_address();
    tracing::info!("Starting HTTP server at {}", bind_address);

    let cors_config = config.cors.clone();
    HttpServer::new(move || {
        let cors = if cors_config.allows_any() {
            Cors::permissive()
        } else {
            cors_config
                .origins()
                .into_iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
                .allow_any_method()
                .allow_any_header()
                .max_age(3600)
        };

        App::new()
            .wrap(cors)
            .wrap(MetricsMiddleware)
            .wrap(TracingLogger::default())
            .configure(|cfg| routes::configure(cfg, &state))
    })
    .bind(&bind_address)?
    .run()
    .await?;

    tracing::info!("post-service shutting down");
    Ok(())
}
