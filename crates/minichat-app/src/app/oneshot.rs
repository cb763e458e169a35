use anyhow::Result;
use colored::Colorize;

use minichat_api::{ChatBackend, ChatClient};
use minichat_types::MessageKind;

use crate::render::{format_conversation, format_message};
use crate::session::{ChatSession, SubmitOutcome};

/// Send a single message and print the reply.
/// Returns `false` when the exchange ended in an error entry.
pub async fn run_send_mode<B: ChatBackend>(session: &ChatSession<B>, text: &str) -> Result<bool> {
    let outcome = session.submit(text).await;
    session.shutdown().await;

    match outcome {
        SubmitOutcome::Replied(reply) => {
            println!("{}", format_message(&reply));
            Ok(reply.kind() != MessageKind::Error)
        }
        SubmitOutcome::Empty => {
            eprintln!("{}", "Nothing to send: the message is empty.".yellow());
            Ok(false)
        }
        SubmitOutcome::Busy => {
            eprintln!("{}", "Another message is still being answered.".yellow());
            Ok(false)
        }
    }
}

/// Print the saved conversation.
pub fn run_history_mode<B: ChatBackend>(session: &ChatSession<B>) -> Result<()> {
    let messages = session.messages();
    if messages.is_empty() {
        println!("{}", "No saved conversation.".bright_black());
    } else {
        println!("{}", format_conversation(&messages));
    }
    Ok(())
}

/// Probe the backend health route. Returns `false` when it is unreachable.
pub async fn run_health_mode(session: &ChatSession<ChatClient>) -> Result<bool> {
    let client = session.backend();
    match client.health().await {
        Ok(status) => {
            println!("{} {} ({})", "✓".green(), client.base_url(), status);
            Ok(true)
        }
        Err(e) => {
            eprintln!("{} {}: {}", "✗".red(), client.base_url(), e);
            Ok(false)
        }
    }
}
