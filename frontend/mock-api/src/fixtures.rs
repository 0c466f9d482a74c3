//! Seed data a fresh `MockApi` starts from.
use crate::models::{MockPost, MockSave, MockUser};
use chrono::{Duration, Utc};

pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1516738901171-8eb4fc13bd20?w=800";

/// The signed-in user every session resolves to
pub fn current_user() -> MockUser {
    MockUser {
        id: "user-1".to_string(),
        account_id: "account-1".to_string(),
        name: "Jane Doe".to_string(),
        username: "janedoe".to_string(),
        email: "jane@snapgram.dev".to_string(),
        image_url: avatar("Jane Doe"),
        bio: "Photographer and traveler".to_string(),
    }
}

pub fn users() -> Vec<MockUser> {
    vec![
        current_user(),
        user("user-2", "John Smith", "johnsmith"),
        user("user-3", "Maria Garcia", "mariag"),
        user("user-4", "Kenji Sato", "kenji"),
    ]
}

/// Newest first
pub fn posts() -> Vec<MockPost> {
    let users = users();
    vec![
        post(1, "Golden hour at the pier", &["tag1", "sunset"], "Santa Monica", &users[0], 1),
        post(2, "Morning run #TAG1 vibes", &["fitness"], "", &users[1], 5),
        post(3, "Street food tour", &["food", "travel"], "Bangkok", &users[2], 12),
        post(4, "New lens day", &["tag10", "gear"], "", &users[3], 30),
        post(5, "Quiet mountains", &["nature"], "Alps", &users[0], 48),
    ]
}

pub fn saves() -> Vec<MockSave> {
    vec![MockSave {
        id: "save-1".to_string(),
        user: "user-1".to_string(),
        post: "post-3".to_string(),
    }]
}

/// ui-avatars image for a display name
pub fn avatar(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=877EFF&color=fff",
        urlencoding::encode(name)
    )
}

fn user(id: &str, name: &str, username: &str) -> MockUser {
    MockUser {
        id: id.to_string(),
        account_id: id.replace("user", "account"),
        name: name.to_string(),
        username: username.to_string(),
        email: format!("{}@snapgram.dev", username),
        image_url: avatar(name),
        bio: String::new(),
    }
}

fn post(
    n: u32,
    caption: &str,
    tags: &[&str],
    location: &str,
    creator: &MockUser,
    hours_ago: i64,
) -> MockPost {
    let created_at = Utc::now() - Duration::hours(hours_ago);
    MockPost {
        id: format!("post-{}", n),
        created_at,
        updated_at: created_at,
        caption: caption.to_string(),
        image_url: PLACEHOLDER_IMAGE_URL.to_string(),
        image_id: format!("img-{}", n),
        location: location.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        likes: Vec::new(),
        creator: creator.clone(),
    }
}
