/// Account registration and login
use crate::db::UserStore;
use crate::error::{AppError, Result};
use crate::models::{AuthResponse, LoginRequest, NewUser, RegisterRequest};
use crate::security::{hash_password, verify_password, JwtKeys};
use std::sync::Arc;
use validator::Validate;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AuthService {
    users: Arc<dyn UserStore>,
    jwt: JwtKeys,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, jwt: JwtKeys) -> Self {
        Self { users, jwt }
    }

    pub async fn register(&self, req: RegisterRequest) -> Result<AuthResponse> {
        req.validate()?;

        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = hash_password(&req.password)?;
        let user = self
            .users
            .create_user(NewUser {
                name: req.name.trim().to_string(),
                username: req.username.trim().to_string(),
                email: req.email.trim().to_string(),
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "user registered");

        let token = self.jwt.issue(&user)?;
        Ok(AuthResponse { user, token })
    }

    /// Unknown email and wrong password produce the same error
    pub async fn login(&self, req: LoginRequest) -> Result<AuthResponse> {
        req.validate()?;

        let user = self
            .users
            .find_by_email(&req.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        verify_password(&req.password, &user.password_hash)?;

        let token = self.jwt.issue(&user)?;
        Ok(AuthResponse { user, token })
    }
}
