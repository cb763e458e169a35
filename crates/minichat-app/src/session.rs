use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use minichat_api::{ChatBackend, ChatError};
use minichat_logging::ConversationLogger;
use minichat_store::{ConversationStore, Observer};
use minichat_types::Message;

/// Result of one user submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing was recorded or sent.
    Empty,
    /// Another exchange is still pending; nothing was recorded or sent.
    Busy,
    /// The exchange settled; carries the bot or error entry that was appended.
    Replied(Message),
}

/// Closes the single-flight gate for its lifetime.
struct PendingGuard<'a>(&'a AtomicBool);

impl<'a> PendingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One chat view: the conversation, the backend it talks to and the
/// gate allowing a single exchange at a time.
pub struct ChatSession<B: ChatBackend> {
    backend: B,
    store: Mutex<ConversationStore>,
    transcript: Option<tokio::sync::Mutex<ConversationLogger>>,
    pending: AtomicBool,
}

impl<B: ChatBackend> ChatSession<B> {
    pub fn new(backend: B, store: ConversationStore) -> Self {
        Self {
            backend,
            store: Mutex::new(store),
            transcript: None,
            pending: AtomicBool::new(false),
        }
    }

    pub fn with_transcript(mut self, logger: ConversationLogger) -> Self {
        self.transcript = Some(tokio::sync::Mutex::new(logger));
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Run one exchange for `raw_text`. Exchange failures become an error
    /// entry in the conversation and never escape.
    pub async fn submit(&self, raw_text: &str) -> SubmitOutcome {
        let text = raw_text.trim();
        let Ok(user_message) = Message::user(text) else {
            return SubmitOutcome::Empty;
        };
        let Some(_gate) = PendingGuard::acquire(&self.pending) else {
            log::debug!("submission rejected, exchange already pending");
            return SubmitOutcome::Busy;
        };

        self.record(user_message).await;

        let reply = match self.backend.send(text).await {
            Ok(reply) => Message::bot(reply).unwrap_or_else(|_| Message::error(ChatError::InvalidResponse)),
            Err(e) => {
                log::warn!("Error fetching chat response: {:?}", e);
                Message::error(e)
            }
        };

        self.record(reply.clone()).await;
        SubmitOutcome::Replied(reply)
    }

    /// Register a re-render hook on the underlying store.
    pub fn subscribe(&self, observer: Observer) {
        self.lock_store().subscribe(observer);
    }

    pub fn messages(&self) -> Vec<Message> {
        self.lock_store().messages().to_vec()
    }

    pub fn snapshot_length(&self) -> usize {
        self.lock_store().snapshot_length()
    }

    pub fn storage_location(&self) -> String {
        self.lock_store().location()
    }

    /// Flush and close the transcript, if any.
    pub async fn shutdown(&self) {
        if let Some(transcript) = &self.transcript {
            transcript.lock().await.shutdown().await;
        }
    }

    async fn record(&self, message: Message) {
        if let Some(transcript) = &self.transcript {
            transcript.lock().await.log(&message).await;
        }
        self.lock_store().append(message);
    }

    fn lock_store(&self) -> MutexGuard<'_, ConversationStore> {
        // Observers run under this lock; a panicking one must not wedge the view
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use minichat_store::MemorySlot;
    use minichat_types::MessageKind;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use tokio::sync::Notify;

    /// Backend that parks every request until released.
    struct GatedBackend {
        release: Arc<Notify>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ChatBackend for GatedBackend {
        async fn send(&self, user_text: &str) -> Result<String, ChatError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            Ok(format!("echo: {}", user_text))
        }
    }

    struct FixedBackend(Result<String, ChatError>);

    #[async_trait]
    impl ChatBackend for FixedBackend {
        async fn send(&self, _user_text: &str) -> Result<String, ChatError> {
            self.0.clone()
        }
    }

    fn empty_store() -> ConversationStore {
        ConversationStore::initialize(Box::new(MemorySlot::new()))
    }

    #[tokio::test]
    async fn test_busy_submission_is_rejected() {
        let release = Arc::new(Notify::new());
        let session = ChatSession::new(
            GatedBackend {
                release: release.clone(),
                calls: AtomicUsize::new(0),
            },
            empty_store(),
        );

        let (first, second) = tokio::join!(session.submit("first"), async {
            assert!(session.is_pending());
            let outcome = session.submit("second").await;
            release.notify_one();
            outcome
        });

        assert_eq!(second, SubmitOutcome::Busy);
        assert_eq!(
            first,
            SubmitOutcome::Replied(Message::bot("echo: first").unwrap())
        );
        assert_eq!(session.backend().calls.load(Ordering::SeqCst), 1);
        assert_eq!(session.snapshot_length(), 2);
        assert!(!session.is_pending());
    }

    #[tokio::test]
    async fn test_gate_reopens_after_failure() {
        let session = ChatSession::new(
            FixedBackend(Err(ChatError::InvalidResponse)),
            empty_store(),
        );

        session.submit("one").await;
        assert!(!session.is_pending());
        session.submit("two").await;
        assert_eq!(session.snapshot_length(), 4);
    }

    #[tokio::test]
    async fn test_empty_reply_from_backend_becomes_error() {
        let session = ChatSession::new(FixedBackend(Ok(String::new())), empty_store());

        let outcome = session.submit("hi").await;
        let SubmitOutcome::Replied(reply) = outcome else {
            panic!("expected a reply");
        };
        assert_eq!(reply.kind(), MessageKind::Error);
        assert_eq!(reply.text(), "Error: Received invalid or empty response from bot.");
    }
}
