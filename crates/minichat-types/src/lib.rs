//! Core types and structures for minichat
//!
//! This crate provides the conversation entry types shared by the store,
//! the exchange client and the terminal view.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Constants
// ============================================================================

/// Backend used when no base URL is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Path appended to the base URL for chat exchanges
pub const CHAT_PATH: &str = "/chat";

/// Name of the durable slot holding the conversation snapshot
pub const SNAPSHOT_KEY: &str = "chatLog";

/// Diagnostic used when a transport failure carries no message of its own
pub const GENERIC_CONNECT_ERROR: &str = "Could not connect to the bot. Please try again.";

/// Prefix put in front of every error entry shown in the conversation
pub const ERROR_TEXT_PREFIX: &str = "Error: ";

// ============================================================================
// Message Types
// ============================================================================

/// Who produced a conversation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Bot,
    Error,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::User => "user",
            MessageKind::Bot => "bot",
            MessageKind::Error => "error",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("message text must not be empty")]
    EmptyText,
}

/// Wire shape of a persisted entry. Snapshots written by the browser
/// client name the kind field `type`.
#[derive(Deserialize)]
struct RawMessage {
    #[serde(alias = "type")]
    kind: MessageKind,
    text: String,
}

impl TryFrom<RawMessage> for Message {
    type Error = MessageError;

    fn try_from(raw: RawMessage) -> Result<Self, Self::Error> {
        Message::new(raw.kind, raw.text)
    }
}

/// One immutable conversation entry. The text is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMessage")]
pub struct Message {
    kind: MessageKind,
    text: String,
}

impl Message {
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Result<Self, MessageError> {
        let text = text.into();
        if text.is_empty() {
            return Err(MessageError::EmptyText);
        }
        Ok(Self { kind, text })
    }

    pub fn user(text: impl Into<String>) -> Result<Self, MessageError> {
        Self::new(MessageKind::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Result<Self, MessageError> {
        Self::new(MessageKind::Bot, text)
    }

    /// Build an error entry from a diagnostic. The prefix guarantees a
    /// non-empty text even for an empty diagnostic.
    pub fn error(diagnostic: impl fmt::Display) -> Self {
        Self {
            kind: MessageKind::Error,
            text: format!("{}{}", ERROR_TEXT_PREFIX, diagnostic),
        }
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_user(&self) -> bool {
        self.kind == MessageKind::User
    }
}
