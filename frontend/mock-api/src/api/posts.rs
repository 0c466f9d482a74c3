use super::{new_id, object_url, MockApi};
use crate::error::{MockError, Result};
use crate::fixtures::PLACEHOLDER_IMAGE_URL;
use crate::models::{
    DocumentList, MockFile, MockPost, MockSave, NewPost, Status, UpdatePost, UploadedFile,
};
use crate::tags::parse_tags;
use chrono::Utc;
use tracing::debug;

const INFINITE_PAGE_SIZE: usize = 9;
const RECENT_POSTS_LIMIT: usize = 20;

impl MockApi {
    /// Create a post authored by the current user and put it first.
    pub async fn create_post(&mut self, post: NewPost) -> MockPost {
        self.pause().await;
        debug!(caption = %post.caption, "mock: creating post");

        let now = Utc::now();
        let image_url = post
            .file
            .first()
            .map(object_url)
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());

        let new_post = MockPost {
            id: new_id("post"),
            created_at: now,
            updated_at: now,
            caption: post.caption,
            image_url,
            image_id: new_id("img"),
            location: post.location.unwrap_or_default(),
            tags: parse_tags(post.tags.as_deref()),
            likes: Vec::new(),
            creator: self.current_user.clone(),
        };

        self.posts.insert(0, new_post.clone());
        new_post
    }

    pub async fn upload_file(&self, file: &MockFile) -> UploadedFile {
        self.pause().await;
        UploadedFile {
            id: new_id("file"),
            name: file.name.clone(),
        }
    }

    /// Preview URL for a stored file. Every file previews as the placeholder.
    pub fn get_file_preview(&self, _file_id: &str) -> String {
        PLACEHOLDER_IMAGE_URL.to_string()
    }

    pub async fn delete_file(&self, _file_id: &str) -> Status {
        self.pause().await;
        Status::new("ok")
    }

    /// Case-insensitive substring match against the caption or any tag
    pub async fn search_posts(&self, term: &str) -> DocumentList<MockPost> {
        self.pause().await;

        let term = term.to_lowercase();
        let matches = self
            .posts
            .iter()
            .filter(|post| {
                post.caption.to_lowercase().contains(&term)
                    || post.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
            })
            .cloned()
            .collect();

        DocumentList::counted(matches)
    }

    /// One page of nine starting at `page_param`. `total` is the whole
    /// collection; the caller works out the next offset.
    pub async fn get_infinite_posts(&self, page_param: Option<usize>) -> DocumentList<MockPost> {
        self.pause().await;

        let start = page_param.unwrap_or(0);
        let documents = self
            .posts
            .iter()
            .skip(start)
            .take(INFINITE_PAGE_SIZE)
            .cloned()
            .collect();

        DocumentList {
            documents,
            total: self.posts.len(),
        }
    }

    pub async fn get_post_by_id(&self, post_id: Option<&str>) -> Result<MockPost> {
        self.pause().await;

        let post_id =
            post_id.ok_or_else(|| MockError::Validation("Post ID is required".to_string()))?;

        self.posts
            .iter()
            .find(|p| p.id == post_id)
            .cloned()
            .ok_or_else(MockError::post_not_found)
    }

    pub async fn update_post(&mut self, update: UpdatePost) -> Result<MockPost> {
        self.pause().await;
        debug!(post_id = %update.post_id, "mock: updating post");

        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == update.post_id)
            .ok_or_else(MockError::post_not_found)?;

        post.caption = update.caption;
        post.location = update.location.unwrap_or_default();
        post.tags = parse_tags(update.tags.as_deref());
        post.updated_at = Utc::now();

        if let Some(file) = update.file.first() {
            post.image_url = object_url(file);
            post.image_id = new_id("img");
        }

        Ok(post.clone())
    }

    /// `None` when no id was given. Unknown ids still report `"Ok"`.
    pub async fn delete_post(
        &mut self,
        post_id: Option<&str>,
        _image_id: Option<&str>,
    ) -> Option<Status> {
        self.pause().await;

        let post_id = post_id?;
        debug!(post_id, "mock: deleting post");

        self.posts.retain(|p| p.id != post_id);
        Some(Status::new("Ok"))
    }

    /// Replace the whole likes set with `likes`
    pub async fn like_post(&mut self, post_id: &str, likes: Vec<String>) -> Result<MockPost> {
        self.pause().await;
        debug!(post_id, likes = likes.len(), "mock: liking post");

        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(MockError::post_not_found)?;

        post.likes = likes;
        Ok(post.clone())
    }

    pub async fn save_post(&mut self, user_id: &str, post_id: &str) -> MockSave {
        self.pause().await;
        debug!(user_id, post_id, "mock: saving post");

        let save = MockSave {
            id: new_id("save"),
            user: user_id.to_string(),
            post: post_id.to_string(),
        };

        self.saves.push(save.clone());
        save
    }

    pub async fn delete_saved_post(&mut self, save_id: &str) -> Status {
        self.pause().await;
        debug!(save_id, "mock: removing saved post");

        self.saves.retain(|s| s.id != save_id);
        Status::new("Ok")
    }

    pub async fn get_user_posts(&self, user_id: Option<&str>) -> Option<DocumentList<MockPost>> {
        self.pause().await;

        let user_id = user_id?;
        let posts = self
            .posts
            .iter()
            .filter(|p| p.creator.id == user_id)
            .cloned()
            .collect();

        Some(DocumentList::counted(posts))
    }

    /// The first twenty posts in collection order
    pub async fn get_recent_posts(&self) -> DocumentList<MockPost> {
        self.pause().await;

        let posts = self
            .posts
            .iter()
            .take(RECENT_POSTS_LIMIT)
            .cloned()
            .collect();

        DocumentList::counted(posts)
    }
}
