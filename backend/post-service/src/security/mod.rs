/// Security module: password hashing and bearer tokens
pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtKeys};
pub use password::{hash_password, verify_password};
