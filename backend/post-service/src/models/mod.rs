/// Data models for post-service
///
/// - User: an account that can author posts
/// - Post: an image post with caption, tags and likes
/// - PostWithCreator: a post with its author resolved to a public projection
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub bio: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Fields needed to insert a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub caption: String,
    pub image: String,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub likes: Vec<Uuid>,
    pub tags: Vec<String>,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to insert a post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub caption: String,
    pub image: String,
    pub user_id: Uuid,
}

/// Public projection of a post's author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorSummary {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub avatar: Option<String>,
}

impl From<&User> for CreatorSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            username: user.username.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostWithCreator {
    pub id: Uuid,
    pub caption: String,
    pub image: String,
    pub user: CreatorSummary,
    pub likes: Vec<Uuid>,
    pub tags: Vec<String>,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostWithCreator {
    pub fn new(post: Post, user: CreatorSummary) -> Self {
        Self {
            id: post.id,
            caption: post.caption,
            image: post.image,
            user,
            likes: post.likes,
            tags: post.tags,
            location: post.location,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1 to 100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 50, message = "Username must be 1 to 50 characters"))]
    pub username: String,
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Returned by register and login
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}
