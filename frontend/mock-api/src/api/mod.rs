//! The mock repository.
//!
//! `MockApi` owns every collection the UI reads, the canonical current user,
//! and the session storage. Each call sleeps for the configured delay before
//! touching state. Mutations borrow `&mut self`, so two of them never
//! interleave.
mod auth;
mod posts;
mod users;

use crate::config::MockApiConfig;
use crate::fixtures;
use crate::models::{MockFile, MockPost, MockSave, MockUser};
use crate::storage::{MemoryStorage, SessionStorage};
use uuid::Uuid;

pub struct MockApi {
    config: MockApiConfig,
    storage: Box<dyn SessionStorage>,
    current_user: MockUser,
    users: Vec<MockUser>,
    posts: Vec<MockPost>,
    saves: Vec<MockSave>,
}

impl MockApi {
    /// Seeded from fixtures, backed by in-memory storage
    pub fn new(config: MockApiConfig) -> Self {
        Self::with_storage(config, Box::new(MemoryStorage::new()))
    }

    pub fn with_storage(config: MockApiConfig, storage: Box<dyn SessionStorage>) -> Self {
        Self {
            config,
            storage,
            current_user: fixtures::current_user(),
            users: fixtures::users(),
            posts: fixtures::posts(),
            saves: fixtures::saves(),
        }
    }

    /// Replace the seeded collections
    pub fn seeded(
        mut self,
        users: Vec<MockUser>,
        posts: Vec<MockPost>,
        saves: Vec<MockSave>,
    ) -> Self {
        self.users = users;
        self.posts = posts;
        self.saves = saves;
        self
    }

    pub fn posts(&self) -> &[MockPost] {
        &self.posts
    }

    pub fn users(&self) -> &[MockUser] {
        &self.users
    }

    pub fn saves(&self) -> &[MockSave] {
        &self.saves
    }

    pub fn storage(&self) -> &dyn SessionStorage {
        self.storage.as_ref()
    }

    async fn pause(&self) {
        if !self.config.delay.is_zero() {
            tokio::time::sleep(self.config.delay).await;
        }
    }
}

/// Prefixed identifier, e.g. `post-3f2a...`
fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// Stand-in for a browser object URL pointing at a picked file
fn object_url(file: &MockFile) -> String {
    format!("blob:snapgram/{}/{}", Uuid::new_v4(), file.name)
}
