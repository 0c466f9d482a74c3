/// HTTP middleware for post-service
///
/// - `JwtAuthMiddleware`: validates the bearer token and attaches the
///   resolved `CurrentUser` to the request
/// - `upload`: multipart parsing that runs before the post controller
pub mod upload;

use crate::db::UserStore;
use crate::error::AppError;
use crate::models::User;
use crate::security::JwtKeys;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

/// The authenticated user, stored in request extensions after auth.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Actix middleware that validates a Bearer token and loads its user.
pub struct JwtAuthMiddleware {
    keys: JwtKeys,
    users: Arc<dyn UserStore>,
}

impl JwtAuthMiddleware {
    pub fn new(keys: JwtKeys, users: Arc<dyn UserStore>) -> Self {
        Self { keys, users }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddlewareService {
            service: Rc::new(service),
            keys: self.keys.clone(),
            users: self.users.clone(),
        }))
    }
}

pub struct JwtAuthMiddlewareService<S> {
    service: Rc<S>,
    keys: JwtKeys,
    users: Arc<dyn UserStore>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let keys = self.keys.clone();
        let users = self.users.clone();

        Box::pin(async move {
            let token = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok())
                .ok_or_else(|| unauthorized("Missing Authorization header"))?
                .strip_prefix("Bearer ")
                .ok_or_else(|| unauthorized("Invalid Authorization scheme"))?
                .to_string();

            let claims = keys.validate(&token).map_err(|e| {
                tracing::warn!("JWT validation failed: {}", e);
                unauthorized("Invalid or expired token")
            })?;

            let user_id = claims
                .user_id()
                .ok_or_else(|| unauthorized("Invalid token: malformed user id"))?;

            let user = users
                .find_by_id(user_id)
                .await
                .map_err(AppError::from)?
                .ok_or_else(|| unauthorized("User no longer exists"))?;

            req.extensions_mut().insert(CurrentUser(user));

            service.call(req).await
        })
    }
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Unauthorized(msg.to_string())
}

impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<CurrentUser>()
                .cloned()
                .ok_or_else(|| unauthorized("User not authenticated").into()),
        )
    }
}
