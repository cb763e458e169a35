use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// CLI arguments for minichat
#[derive(Parser, Debug)]
#[command(name = "minichat")]
#[command(about = "Minichat - a minimal terminal client for a remote chat endpoint")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the chat backend (e.g., http://localhost:8000)
    #[arg(long, value_name = "URL", env = "MINICHAT_API_BASE_URL")]
    pub api_url: Option<String>,

    /// Directory holding the saved conversation (default: ~/.minichat)
    #[arg(long, value_name = "DIR", env = "MINICHAT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep the conversation in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// Give up on a request after this many seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Append a JSONL transcript of the session under <DIR>/logs
    #[arg(long)]
    pub transcript: bool,

    /// Enable verbose debug output (shows HTTP requests and responses)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Send one message, print the reply and exit
    Send {
        /// Text to send
        text: String,
    },
    /// Print the saved conversation
    History,
    /// Check that the backend is up
    Health,
}
