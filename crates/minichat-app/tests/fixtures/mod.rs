use std::path::Path;
use std::time::Duration;

use minichat::{ChatClient, ChatSession, ClientConfig, ConversationStore};
use minichat::store::{FileSlot, MemorySlot};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mount a chat route answering every request with `status` and `body`
pub async fn mount_chat(server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a chat route that answers only after `delay`
#[allow(dead_code)]
pub async fn mount_slow_chat(server: &MockServer, reply: &str, delay: Duration) {
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "response": reply }))
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

pub async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.map(|r| r.len()).unwrap_or(0)
}

/// Session with an in-memory conversation
pub fn memory_session(base_url: &str) -> ChatSession<ChatClient> {
    let store = ConversationStore::initialize(Box::new(MemorySlot::new()));
    ChatSession::new(ChatClient::new(base_url), store)
}

/// Session persisting to `dir`
#[allow(dead_code)]
pub fn file_session(base_url: &str, dir: &Path) -> ChatSession<ChatClient> {
    let store = ConversationStore::initialize(Box::new(FileSlot::new(dir)));
    ChatSession::new(ChatClient::new(base_url), store)
}

#[allow(dead_code)]
pub fn test_config(base_url: &str, data_dir: &Path) -> ClientConfig {
    ClientConfig {
        api_base_url: base_url.to_string(),
        data_dir: data_dir.to_path_buf(),
        persist: true,
        timeout: None,
        transcript: false,
        verbose: false,
    }
}

/// A base URL nothing is listening on
#[allow(dead_code)]
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
