//! # minichat-api
//!
//! Client side of the chat exchange: one `POST {base}/chat` per user
//! submission, with the outcome classified into a reply or a [`ChatError`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use minichat_api::{ChatBackend, ChatClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ChatClient::new("http://localhost:8000");
//!     match client.send("Hello!").await {
//!         Ok(reply) => println!("Bot: {}", reply),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{ChatBackend, ChatClient};
pub use config::{normalize_base_url, ClientOptions};
pub use error::ChatError;
