use colored::Colorize;

use minichat_types::{Message, MessageKind, ERROR_TEXT_PREFIX};

/// Prompt suggestions shown by `/tips`
pub const PROMPT_TIPS: [&str; 3] = [
    "Summarize this project in 3 bullet points.",
    "Explain this like I'm 12 years old.",
    "Give me 3 ideas to improve this chatbot.",
];

/// Render one conversation entry as a terminal line
pub fn format_message(message: &Message) -> String {
    match message.kind() {
        MessageKind::User => format!("{} {}", "You:".bright_green().bold(), message.text()),
        MessageKind::Bot => format!("{} {}", "Bot:".bright_cyan().bold(), message.text()),
        MessageKind::Error => {
            // The error text already carries its label
            let body = message.text().strip_prefix(ERROR_TEXT_PREFIX).unwrap_or(message.text());
            format!("{} {}", "Error:".bright_red().bold(), body.red())
        }
    }
}

/// Render a whole conversation, oldest first
pub fn format_conversation(messages: &[Message]) -> String {
    messages
        .iter()
        .map(format_message)
        .collect::<Vec<_>>()
        .join("\n")
}
