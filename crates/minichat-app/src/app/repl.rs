use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::Write;

use minichat_api::ChatClient;

use crate::config::ClientConfig;
use crate::render::{format_conversation, format_message, PROMPT_TIPS};
use crate::session::{ChatSession, SubmitOutcome};

const THINKING: &str = "Bot is thinking...";

/// Slash commands handled locally; any other line goes to the bot
const COMMANDS: [&str; 5] = ["/help", "/info", "/tips", "/health", "/history"];

/// Sends the rest of the line verbatim, e.g. `/say exit`
const SAY_COMMAND: &str = "/say";

/// What a line typed at the prompt asks for
#[derive(Debug, PartialEq, Eq)]
enum ReplInput<'a> {
    Quit,
    Command(&'a str),
    Chat(&'a str),
}

fn classify_line(line: &str) -> ReplInput<'_> {
    if line == "exit" || line == "quit" {
        ReplInput::Quit
    } else if let Some(text) = line
        .strip_prefix(SAY_COMMAND)
        .filter(|rest| rest.is_empty() || rest.starts_with(' '))
    {
        ReplInput::Chat(text.trim_start())
    } else if COMMANDS.contains(&line) {
        ReplInput::Command(line)
    } else {
        ReplInput::Chat(line)
    }
}

/// Run interactive REPL mode
pub async fn run_repl_mode(config: &ClientConfig, session: ChatSession<ChatClient>) -> Result<()> {
    println!("{}", "💬 Minichat".bright_cyan().bold());
    println!("{}", format!("Backend: {}", config.api_base_url).bright_black());
    println!(
        "{}",
        "Type 'exit' or 'quit' to exit, or '/help' to see available commands\n".bright_black()
    );

    let history = session.messages();
    if !history.is_empty() {
        println!("{}", format_conversation(&history));
        println!();
    }

    // The prompt already echoes what the user typed; render only the answers,
    // over the thinking indicator
    session.subscribe(Box::new(|messages| {
        if let Some(last) = messages.last().filter(|m| !m.is_user()) {
            println!("\r{}\r{}", " ".repeat(THINKING.len()), format_message(last));
        }
    }));

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(&format!("{} ", "You:".bright_green().bold()));

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                let text = match classify_line(line) {
                    ReplInput::Quit => {
                        println!("{}", "Goodbye!".bright_cyan());
                        break;
                    }
                    ReplInput::Command(command) => {
                        handle_command(command, config, &session).await;
                        continue;
                    }
                    ReplInput::Chat(text) => text,
                };

                print!("{}", THINKING.bright_black());
                let _ = std::io::stdout().flush();

                match session.submit(text).await {
                    SubmitOutcome::Replied(_) => {}
                    SubmitOutcome::Empty => {
                        print!("\r{}\r", " ".repeat(THINKING.len()));
                        let _ = std::io::stdout().flush();
                    }
                    SubmitOutcome::Busy => {
                        println!("\r{}", "Still waiting for the previous answer.".yellow());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".bright_black());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(err) => {
                eprintln!("{} {:?}", "Error:".bright_red(), err);
                break;
            }
        }
    }

    session.shutdown().await;
    Ok(())
}

async fn handle_command(line: &str, config: &ClientConfig, session: &ChatSession<ChatClient>) {
    match line {
        "/help" => {
            println!("{}", "Commands:".bright_yellow());
            println!("  /info     session info");
            println!("  /tips     prompts to try");
            println!("  /health   check the backend");
            println!("  /history  show the whole conversation");
            println!("  /say TEXT send TEXT as-is (e.g. /say exit)");
            println!("  exit      leave");
        }
        "/info" => {
            println!("{}", "Session Info".bright_yellow().bold());
            println!("  Messages in chat: {}", session.snapshot_length().to_string().bright_white());
            println!("  Backend: {}", config.api_base_url.bright_white());
            println!("  Storage: {}", session.storage_location().bright_white());
            if let Some(timeout) = config.timeout {
                println!("  Timeout: {}s", timeout.as_secs());
            }
        }
        "/tips" => {
            println!("{}", "Try these prompts".bright_yellow().bold());
            for tip in PROMPT_TIPS {
                println!("  “{}”", tip);
            }
        }
        "/health" => {
            let client = session.backend();
            match client.health().await {
                Ok(status) => println!("{} backend is {}", "✓".green(), status),
                Err(e) => eprintln!("{} {}", "✗".red(), e),
            }
        }
        "/history" => {
            let messages = session.messages();
            if messages.is_empty() {
                println!("{}", "No messages yet.".bright_black());
            } else {
                println!("{}", format_conversation(&messages));
            }
        }
        other => {
            eprintln!(
                "{} Unknown command '{}'. Type /help for a list.",
                "❌".bright_red(),
                other
            );
        }
    }
}
