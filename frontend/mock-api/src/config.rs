use std::time::Duration;

/// Latency every mock call waits before resolving
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct MockApiConfig {
    pub delay: Duration,
}

impl Default for MockApiConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }
}

impl MockApiConfig {
    /// No artificial latency
    pub fn instant() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}
