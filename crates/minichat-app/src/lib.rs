//! Minichat Application Library
//!
//! Terminal chat view over a single remote chat endpoint.

pub use minichat_api::{self as api, ChatBackend, ChatClient, ChatError};
pub use minichat_store::{self as store, ConversationStore};
pub use minichat_types::{self as types, Message, MessageKind};

pub mod app;
pub mod cli;
pub mod config;
pub mod render;
pub mod session;

pub use app::{build_session, run_health_mode, run_history_mode, run_repl_mode, run_send_mode};
pub use cli::{Cli, Commands};
pub use config::{resolve_api_base_url, ClientConfig};
pub use session::{ChatSession, SubmitOutcome};
