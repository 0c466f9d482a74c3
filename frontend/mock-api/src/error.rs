use thiserror::Error;

pub type Result<T> = std::result::Result<T, MockError>;

/// Failures raised straight to the caller of a mock operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MockError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),
}

impl MockError {
    pub fn post_not_found() -> Self {
        MockError::NotFound("Post not found".to_string())
    }

    pub fn user_not_found() -> Self {
        MockError::NotFound("User not found".to_string())
    }
}
