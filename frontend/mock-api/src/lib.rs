/// Snapgram Mock API
///
/// An in-memory substitute for the backend client the frontend talks to. The
/// call surface (auth, posts, users) matches a real client; everything runs
/// against collections seeded from fixtures after a short artificial delay.
///
/// # Modules
///
/// - `api`: the `MockApi` repository and its operations
/// - `models`: documents and request shapes
/// - `storage`: session marker storage
/// - `fixtures`: seed data
/// - `tags`: tag field parsing
pub mod api;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod storage;
pub mod tags;

pub use api::MockApi;
pub use config::MockApiConfig;
pub use error::{MockError, Result};
