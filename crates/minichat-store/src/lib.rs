//! Conversation storage for minichat
//!
//! Holds the ordered, append-only conversation and mirrors every change
//! into a durable key-value slot so it survives a restart.

mod error;
mod slot;
mod store;

pub use error::PersistenceError;
pub use slot::{FileSlot, MemorySlot, SnapshotSlot};
pub use store::{ConversationStore, Observer};
