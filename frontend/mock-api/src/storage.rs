//! Browser-style key/value storage holding the session marker.
use std::collections::HashMap;

/// Storage key the session marker lives under
pub const SESSION_KEY: &str = "cookieFallback";

/// The marker only has to be present and not `"[]"`; its content is never read.
pub fn session_marker() -> String {
    serde_json::json!([{ "name": "session", "value": "active" }]).to_string()
}

/// Minimal `localStorage` surface
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: String);
    fn remove_item(&mut self, key: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) {
        self.items.insert(key.to_string(), value);
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}
