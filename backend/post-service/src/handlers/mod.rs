/// HTTP handlers
///
/// - Auth: register and login
/// - Users: the authenticated profile
/// - Posts: create with image upload, list all
/// - Health: liveness, plus the JSON 404 fallback
pub mod auth;
pub mod health;
pub mod posts;
pub mod users;

pub use auth::{login, register};
pub use health::{health_check, not_found};
pub use posts::{create_post, get_all_posts};
pub use users::me;
