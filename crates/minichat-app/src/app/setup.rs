use anyhow::{Context, Result};

use minichat_api::ChatClient;
use minichat_logging::{get_logs_dir, ConversationLogger};
use minichat_store::{ConversationStore, FileSlot, MemorySlot, SnapshotSlot};

use crate::config::ClientConfig;
use crate::session::ChatSession;

/// Build the chat session described by the configuration: restore the
/// saved conversation and connect the HTTP client.
pub async fn build_session(config: &ClientConfig) -> Result<ChatSession<ChatClient>> {
    let slot: Box<dyn SnapshotSlot> = if config.persist {
        Box::new(FileSlot::new(&config.data_dir))
    } else {
        Box::new(MemorySlot::new())
    };
    let store = ConversationStore::initialize(slot);

    let client = ChatClient::with_options(&config.api_base_url, config.client_options())
        .context("Failed to create HTTP client")?;

    let mut session = ChatSession::new(client, store);

    if config.transcript {
        let logs_dir = get_logs_dir(&config.data_dir)?;
        let logger = ConversationLogger::new(&logs_dir)
            .await
            .with_context(|| format!("Failed to open transcript in {}", logs_dir.display()))?;
        log::info!("transcript: {}", logger.file_path().display());
        session = session.with_transcript(logger);
    }

    Ok(session)
}
