//! In-memory fakes for the store and media host traits.
//!
//! Lets the HTTP surface run under `actix_web::test` without PostgreSQL or S3.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, Utc};
use post_service::config::JwtConfig;
use post_service::db::{PostStore, UserStore};
use post_service::middleware::upload::UploadedImage;
use post_service::models::{CreatorSummary, NewPost, NewUser, Post, PostWithCreator, User};
use post_service::security::{hash_password, JwtKeys};
use post_service::services::{MediaError, MediaHost};
use post_service::AppState;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub const JWT_SECRET: &str = "test-secret-test-secret-test-secret!";
pub const UPLOADED_URL_PREFIX: &str = "https://media.test/snapgram_posts/";

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, sqlx::Error> {
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            username: new_user.username,
            email: new_user.email.to_lowercase(),
            avatar: None,
            bio: String::new(),
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let email = email.to_lowercase();
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}

/// Post store that joins against a shared user store.
///
/// Lists come back in insertion order, so sorting is left to the service.
pub struct InMemoryPostStore {
    users: Arc<InMemoryUserStore>,
    posts: Mutex<Vec<Post>>,
    pub fail_inserts: Mutex<bool>,
}

impl InMemoryPostStore {
    pub fn new(users: Arc<InMemoryUserStore>) -> Self {
        Self {
            users,
            posts: Mutex::new(Vec::new()),
            fail_inserts: Mutex::new(false),
        }
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    /// Seed a post with an explicit age
    pub fn seed(&self, author: &User, caption: &str, age_minutes: i64) -> Post {
        let created_at = Utc::now() - Duration::minutes(age_minutes);
        let post = Post {
            id: Uuid::new_v4(),
            caption: caption.to_string(),
            image: format!("{}{}.png", UPLOADED_URL_PREFIX, Uuid::new_v4()),
            user_id: author.id,
            likes: vec![],
            tags: vec![],
            location: String::new(),
            created_at,
            updated_at: created_at,
        };
        self.posts.lock().unwrap().push(post.clone());
        post
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert_post(&self, new_post: NewPost) -> Result<Post, sqlx::Error> {
        if *self.fail_inserts.lock().unwrap() {
            return Err(sqlx::Error::PoolTimedOut);
        }
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            caption: new_post.caption,
            image: new_post.image,
            user_id: new_post.user_id,
            likes: vec![],
            tags: vec![],
            location: String::new(),
            created_at: now,
            updated_at: now,
        };
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn list_with_creators(&self) -> Result<Vec<PostWithCreator>, sqlx::Error> {
        let posts = self.posts.lock().unwrap().clone();
        let mut out = Vec::with_capacity(posts.len());
        for post in posts {
            let author = self
                .users
                .find_by_id(post.user_id)
                .await?
                .ok_or(sqlx::Error::RowNotFound)?;
            out.push(PostWithCreator::new(post, CreatorSummary::from(&author)));
        }
        Ok(out)
    }
}

/// Media host that records uploads and returns predictable URLs
#[derive(Default)]
pub struct FakeMediaHost {
    pub uploads: Mutex<Vec<String>>,
    pub fail: Mutex<bool>,
}

#[async_trait]
impl MediaHost for FakeMediaHost {
    async fn upload_image(&self, image: &UploadedImage) -> Result<String, MediaError> {
        if *self.fail.lock().unwrap() {
            return Err(MediaError::Upload("media host unavailable".to_string()));
        }
        let url = format!(
            "{}{}-{}",
            UPLOADED_URL_PREFIX,
            Uuid::new_v4(),
            image.file_name.clone().unwrap_or_default()
        );
        self.uploads.lock().unwrap().push(url.clone());
        Ok(url)
    }
}

pub struct TestContext {
    pub state: AppState,
    pub users: Arc<InMemoryUserStore>,
    pub posts: Arc<InMemoryPostStore>,
    pub media: Arc<FakeMediaHost>,
    pub jwt: JwtKeys,
}

pub fn context() -> TestContext {
    context_with_upload_limit(1024 * 1024)
}

pub fn context_with_upload_limit(max_upload_bytes: usize) -> TestContext {
    let users = Arc::new(InMemoryUserStore::default());
    let posts = Arc::new(InMemoryPostStore::new(users.clone()));
    let media = Arc::new(FakeMediaHost::default());
    let jwt = JwtKeys::new(&JwtConfig {
        secret: JWT_SECRET.to_string(),
        ttl_secs: 3600,
    });

    let state = AppState {
        users: users.clone(),
        posts: posts.clone(),
        media: media.clone(),
        jwt: jwt.clone(),
        max_upload_bytes,
    };

    TestContext {
        state,
        users,
        posts,
        media,
        jwt,
    }
}

impl TestContext {
    /// Create a user directly in the store and return it with a valid token
    pub async fn signed_in_user(&self, username: &str) -> (User, String) {
        let user = self
            .users
            .create_user(NewUser {
                name: username.to_string(),
                username: username.to_string(),
                email: format!("{}@example.com", username),
                password_hash: hash_password("SecurePass123!").unwrap(),
            })
            .await
            .unwrap();
        let token = self.jwt.issue(&user).unwrap();
        (user, token)
    }
}

pub const BOUNDARY: &str = "----snapgram-test-boundary";

pub enum Part<'a> {
    Text { name: &'a str, value: &'a str },
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
}

/// Hand-rolled multipart body for `TestRequest::set_payload`
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                        name, file_name, content_type
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}
