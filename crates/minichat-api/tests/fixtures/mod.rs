use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock chat backend for exercising the exchange client
pub struct ChatMockServer {
    server: MockServer,
}

#[allow(dead_code)]
impl ChatMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Reply with `{"response": reply}` to exactly this user message
    pub async fn mock_reply(&self, user_message: &str, reply: &str) {
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "user_message": user_message })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": reply })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Respond to any chat request with a raw status and body
    pub async fn mock_raw(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Respond to any chat request with a JSON body
    pub async fn mock_json(&self, status: u16, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Reply successfully after a delay
    pub async fn mock_slow_reply(&self, reply: &str, delay: Duration) {
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "response": reply }))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Health route of the backend
    pub async fn mock_health(&self) {
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
            .mount(&self.server)
            .await;
    }

    pub async fn received_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }
}

/// A base URL nothing is listening on
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
