use crate::models::{CreatorSummary, NewPost, Post, PostWithCreator};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// Repository for posts.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn insert_post(&self, new_post: NewPost) -> Result<Post, sqlx::Error>;

    /// Every post joined with its author, newest first
    async fn list_with_creators(&self) -> Result<Vec<PostWithCreator>, sqlx::Error>;
}

#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PostCreatorRow {
    id: Uuid,
    caption: String,
    image: String,
    user_id: Uuid,
    likes: Vec<Uuid>,
    tags: Vec<String>,
    location: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    creator_name: String,
    creator_username: String,
    creator_avatar: Option<String>,
}

impl From<PostCreatorRow> for PostWithCreator {
    fn from(row: PostCreatorRow) -> Self {
        PostWithCreator {
            id: row.id,
            caption: row.caption,
            image: row.image,
            user: CreatorSummary {
                id: row.user_id,
                name: row.creator_name,
                username: row.creator_username,
                avatar: row.creator_avatar,
            },
            likes: row.likes,
            tags: row.tags,
            location: row.location,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn insert_post(&self, new_post: NewPost) -> Result<Post, sqlx::Error> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (caption, image, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, caption, image, user_id, likes, tags, location, created_at, updated_at
            "#,
        )
        .bind(&new_post.caption)
        .bind(&new_post.image)
        .bind(new_post.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn list_with_creators(&self) -> Result<Vec<PostWithCreator>, sqlx::Error> {
        let rows = sqlx::query_as::<_, PostCreatorRow>(
            r#"
            SELECT p.id, p.caption, p.image, p.user_id, p.likes, p.tags, p.location,
                   p.created_at, p.updated_at,
                   u.name AS creator_name,
                   u.username AS creator_username,
                   u.avatar AS creator_avatar
            FROM posts p
            JOIN users u ON u.id = p.user_id
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostWithCreator::from).collect())
    }
}
