use super::{object_url, MockApi};
use crate::error::{MockError, Result};
use crate::models::{DocumentList, MockUser, UpdateUser};
use tracing::debug;

impl MockApi {
    /// All users in insertion order, truncated when `limit` is a positive count
    pub async fn get_users(&self, limit: Option<usize>) -> DocumentList<MockUser> {
        self.pause().await;

        let users = match limit {
            Some(n) if n > 0 => self.users.iter().take(n).cloned().collect(),
            _ => self.users.clone(),
        };

        DocumentList::counted(users)
    }

    pub async fn get_user_by_id(&self, user_id: &str) -> Result<MockUser> {
        self.pause().await;

        self.users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or_else(MockError::user_not_found)
    }

    /// Update a profile.
    ///
    /// The canonical current user is edited in place and its listed copy, if
    /// any, is kept in step. Any other id must be in the users collection.
    pub async fn update_user(&mut self, update: UpdateUser) -> Result<MockUser> {
        self.pause().await;
        debug!(user_id = %update.user_id, "mock: updating user");

        let image_url = update.file.first().map(object_url);

        if update.user_id == self.current_user.id {
            apply(&mut self.current_user, &update, image_url);
            let current = self.current_user.clone();

            if let Some(listed) = self.users.iter_mut().find(|u| u.id == current.id) {
                *listed = current.clone();
            }

            return Ok(current);
        }

        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == update.user_id)
            .ok_or_else(MockError::user_not_found)?;

        apply(user, &update, image_url);
        Ok(user.clone())
    }
}

fn apply(user: &mut MockUser, update: &UpdateUser, image_url: Option<String>) {
    user.name = update.name.clone();
    user.bio = update.bio.clone();
    if let Some(url) = image_url {
        user.image_url = url;
    }
}
