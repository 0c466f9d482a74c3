//! Document shapes handed to the UI.
//!
//! Field names follow the frontend's document interface (`$id`, `imageUrl`,
//! `$createdAt`), so these serialize exactly as the screens read them.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockUser {
    #[serde(rename = "$id")]
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub image_url: String,
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockPost {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "$createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "$updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub caption: String,
    pub image_url: String,
    pub image_id: String,
    pub location: String,
    pub tags: Vec<String>,
    pub likes: Vec<String>,
    pub creator: MockUser,
}

/// A bookmark. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockSave {
    #[serde(rename = "$id")]
    pub id: String,
    pub user: String,
    pub post: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(rename = "$id")]
    pub id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub status: String,
}

impl Status {
    pub fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }
}

/// A page or filtered slice plus its size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentList<T> {
    pub documents: Vec<T>,
    pub total: usize,
}

impl<T> DocumentList<T> {
    /// `total` counts `documents`
    pub fn counted(documents: Vec<T>) -> Self {
        let total = documents.len();
        Self { documents, total }
    }
}

/// A file picked in the browser. Only the name survives into the mock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockFile {
    pub name: String,
}

impl MockFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub user_id: String,
    pub caption: String,
    pub file: Vec<MockFile>,
    pub location: Option<String>,
    /// Comma-separated, e.g. `"art, travel"`
    pub tags: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePost {
    pub post_id: String,
    pub caption: String,
    pub image_id: String,
    pub image_url: String,
    pub file: Vec<MockFile>,
    pub location: Option<String>,
    pub tags: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub user_id: String,
    pub name: String,
    pub bio: String,
    pub image_id: String,
    pub image_url: String,
    pub file: Vec<MockFile>,
}
