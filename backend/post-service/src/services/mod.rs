/// Business logic layer
pub mod auth;
pub mod media;
pub mod posts;

pub use auth::AuthService;
pub use media::{MediaError, MediaHost, S3MediaHost};
pub use posts::PostService;
