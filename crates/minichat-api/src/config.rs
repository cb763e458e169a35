use std::time::Duration;

use minichat_types::DEFAULT_API_BASE_URL;

/// Transport options for [`crate::ChatClient`].
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Per-request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Print request/response debug blocks.
    pub verbose: bool,
}

/// Trim whitespace and trailing slashes so the fixed path can be appended.
/// An empty value falls back to the local development backend.
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
