/// Post service - post creation and listing
use crate::db::PostStore;
use crate::error::{AppError, Result};
use crate::middleware::upload::UploadedImage;
use crate::models::{NewPost, Post, PostWithCreator, User};
use crate::services::media::MediaHost;
use std::sync::Arc;

pub struct PostService {
    posts: Arc<dyn PostStore>,
    media: Arc<dyn MediaHost>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostStore>, media: Arc<dyn MediaHost>) -> Self {
        Self { posts, media }
    }

    /// Upload the image, then persist a post that points at it.
    ///
    /// Nothing is uploaded or written when the image is missing.
    pub async fn create_post(
        &self,
        author: &User,
        caption: Option<String>,
        image: Option<UploadedImage>,
    ) -> Result<Post> {
        let image = image.ok_or_else(|| AppError::validation("Image is required"))?;

        let image_url = self
            .media
            .upload_image(&image)
            .await
            .map_err(|e| AppError::upstream(e.to_string()))?;

        let post = self
            .posts
            .insert_post(NewPost {
                caption: caption.unwrap_or_default(),
                image: image_url,
                user_id: author.id,
            })
            .await?;

        tracing::info!(post_id = %post.id, user_id = %author.id, "post created");

        Ok(post)
    }

    /// All posts with their creators, newest first
    pub async fn get_all_posts(&self) -> Result<Vec<PostWithCreator>> {
        let mut posts = self.posts.list_with_creators().await?;
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}
