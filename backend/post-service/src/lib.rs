/// Post Service Library
///
/// Backend for the Snapgram posting app: account registration/login, the
/// authenticated profile, and image posts uploaded to an external media host.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `routes`: route table and per-scope middleware
/// - `middleware`: bearer auth and multipart upload parsing
/// - `services`: post, auth and media host logic
/// - `db`: repositories over PostgreSQL
/// - `models`: users, posts and request bodies
/// - `security`: password hashing and tokens
/// - `metrics`, `telemetry`: observability
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod security;
pub mod services;
pub mod telemetry;

pub use config::Config;
pub use error::{AppError, Result};

use db::{PostStore, UserStore};
use security::JwtKeys;
use services::{AuthService, MediaHost, PostService};
use std::sync::Arc;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub posts: Arc<dyn PostStore>,
    pub media: Arc<dyn MediaHost>,
    pub jwt: JwtKeys,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn post_service(&self) -> PostService {
        PostService::new(self.posts.clone(), self.media.clone())
    }

    pub fn auth_service(&self) -> AuthService {
        AuthService::new(self.users.clone(), self.jwt.clone())
    }
}
