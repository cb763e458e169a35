use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde_json::Value;

use minichat_logging::{log_request, log_response};
use minichat_types::CHAT_PATH;

use crate::config::{normalize_base_url, ClientOptions};
use crate::ChatError;

/// One request/response exchange per call; no retries.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send the user's text and resolve to the bot's reply.
    async fn send(&self, user_text: &str) -> Result<String, ChatError>;
}

/// HTTP client for the chat backend
pub struct ChatClient {
    base_url: String,
    verbose: bool,
    client: reqwest::Client,
}

impl ChatClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            verbose: false,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_options(base_url: &str, options: ClientOptions) -> Result<Self, ChatError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ChatError::transport(&e))?;

        Ok(Self {
            base_url: normalize_base_url(base_url),
            verbose: options.verbose,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn chat_url(&self) -> String {
        format!("{}{}", self.base_url, CHAT_PATH)
    }

    /// Probe the backend's health route (`GET /`) and return its status.
    pub async fn health(&self) -> Result<String, ChatError> {
        let url = format!("{}/", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ChatError::transport(&e))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log_response(&status, &body, self.verbose);

        if !status.is_success() {
            return Err(ChatError::Http {
                status: status.as_u16(),
                detail: error_detail(status, &body),
            });
        }

        let value: Value = serde_json::from_str(&body)
            .map_err(|e| ChatError::transport_detail(format!("malformed response body: {}", e)))?;
        match value.get("status") {
            Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
            _ => Err(ChatError::InvalidResponse),
        }
    }
}

#[async_trait]
impl ChatBackend for ChatClient {
    async fn send(&self, user_text: &str) -> Result<String, ChatError> {
        let url = self.chat_url();
        let request = serde_json::json!({ "user_message": user_text.trim() });
        log_request(&url, &request, self.verbose);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                log::debug!("chat request to {} failed: {}", url, e);
                ChatError::transport(&e)
            })?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body is treated like a non-JSON one
            let body = response.text().await.unwrap_or_default();
            log_response(&status, &body, self.verbose);
            return Err(ChatError::Http {
                status: status.as_u16(),
                detail: error_detail(status, &body),
            });
        }

        let body = response.text().await.map_err(|e| ChatError::transport(&e))?;
        log_response(&status, &body, self.verbose);
        parse_reply(&body)
    }
}

/// Validate a success body: `{"response": "<non-empty string>"}`.
fn parse_reply(body: &str) -> Result<String, ChatError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ChatError::transport_detail(format!("malformed response body: {}", e)))?;

    match value.get("response") {
        Some(Value::String(text)) if !text.is_empty() => Ok(text.clone()),
        _ => Err(ChatError::InvalidResponse),
    }
}

/// Pick the message shown for a failed status. Server-supplied `detail`
/// wins; FastAPI validation lists are flattened to their `msg` entries.
fn error_detail(status: StatusCode, body: &str) -> String {
    let fallback = match status.canonical_reason() {
        Some(reason) => format!("HTTP error! Status: {} {}", status.as_u16(), reason),
        None => format!("HTTP error! Status: {}", status.as_u16()),
    };

    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return fallback;
    };

    match value.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(Value::Array(items)) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if msgs.is_empty() {
                fallback
            } else {
                msgs.join("; ")
            }
        }
        _ => fallback,
    }
}
