use minichat_types::{Message, SNAPSHOT_KEY};

use crate::{PersistenceError, SnapshotSlot};

/// Callback run with the full ordered conversation after every append.
pub type Observer = Box<dyn Fn(&[Message]) + Send + Sync>;

/// Ordered, append-only conversation mirrored to a snapshot slot.
pub struct ConversationStore {
    messages: Vec<Message>,
    slot: Box<dyn SnapshotSlot>,
    observers: Vec<Observer>,
}

impl ConversationStore {
    /// Restore the conversation from the slot. Never fails: an absent,
    /// unreadable or corrupt snapshot yields an empty conversation.
    pub fn initialize(slot: Box<dyn SnapshotSlot>) -> Self {
        let messages = match read_snapshot(slot.as_ref()) {
            Ok(Some(messages)) => {
                log::info!("restored {} messages from {}", messages.len(), slot.describe());
                messages
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to load chat log from {}: {}", slot.describe(), e);
                Vec::new()
            }
        };

        Self {
            messages,
            slot,
            observers: Vec::new(),
        }
    }

    /// Add a message at the end and rewrite the snapshot. A failed write is
    /// logged; the in-memory append stands.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);

        for observer in &self.observers {
            observer(&self.messages);
        }

        if let Err(e) = self.persist() {
            log::warn!("Failed to save chat log to {}: {}", self.slot.describe(), e);
        }
    }

    pub fn subscribe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn snapshot_length(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn location(&self) -> String {
        self.slot.describe()
    }

    fn persist(&self) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(&self.messages)?;
        self.slot.save(SNAPSHOT_KEY, &json)
    }
}

fn read_snapshot(slot: &dyn SnapshotSlot) -> Result<Option<Vec<Message>>, PersistenceError> {
    match slot.load(SNAPSHOT_KEY)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}
