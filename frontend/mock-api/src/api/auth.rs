use super::{new_id, MockApi};
use crate::fixtures;
use crate::models::{Account, MockUser, NewUser, Session, SignInRequest, Status};
use crate::storage::{session_marker, SESSION_KEY};
use tracing::debug;

impl MockApi {
    /// Register a user and mark the session active.
    pub async fn create_user_account(&mut self, user: NewUser) -> MockUser {
        self.pause().await;
        debug!(email = %user.email, "mock: creating user account");

        let id = new_id("user");
        let new_user = MockUser {
            account_id: id.clone(),
            id,
            image_url: fixtures::avatar(&user.name),
            name: user.name,
            username: user.username,
            email: user.email,
            bio: String::new(),
        };

        self.users.push(new_user.clone());
        self.storage.set_item(SESSION_KEY, session_marker());

        new_user
    }

    /// Always succeeds. The session belongs to the canonical current user
    /// whatever credentials were passed.
    pub async fn sign_in_account(&mut self, credentials: SignInRequest) -> Session {
        self.pause().await;
        debug!(email = %credentials.email, "mock: signing in");

        self.storage.set_item(SESSION_KEY, session_marker());

        Session {
            id: "session-123".to_string(),
            user_id: self.current_user.id.clone(),
        }
    }

    pub async fn get_account(&self) -> Option<Account> {
        self.pause().await;
        self.account()
    }

    pub async fn get_current_user(&self) -> Option<MockUser> {
        self.pause().await;
        self.account().map(|_| self.current_user.clone())
    }

    pub async fn sign_out_account(&mut self) -> Status {
        self.pause().await;
        debug!("mock: signing out");

        self.storage.remove_item(SESSION_KEY);
        Status::new("success")
    }

    fn account(&self) -> Option<Account> {
        match self.storage.get_item(SESSION_KEY) {
            Some(marker) if marker != "[]" => Some(Account {
                id: self.current_user.account_id.clone(),
                name: self.current_user.name.clone(),
                email: self.current_user.email.clone(),
            }),
            _ => None,
        }
    }
}
