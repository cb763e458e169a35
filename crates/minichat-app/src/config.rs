use std::env;
use std::path::PathBuf;
use std::time::Duration;

use minichat_api::{normalize_base_url, ClientOptions};
use minichat_types::DEFAULT_API_BASE_URL;

use crate::cli::Cli;

/// Environment variable used by the browser build of the client
pub const LEGACY_BASE_URL_ENV: &str = "VITE_API_BASE_URL";

/// Application configuration, resolved once at start-up
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub data_dir: PathBuf,
    pub persist: bool,
    pub timeout: Option<Duration>,
    pub transcript: bool,
    pub verbose: bool,
}

impl ClientConfig {
    /// Precedence: CLI flags > MINICHAT_* env (via clap) > legacy env > defaults
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            api_base_url: resolve_api_base_url(cli.api_url.as_deref()),
            data_dir: cli.data_dir.clone().unwrap_or_else(resolve_data_dir),
            persist: !cli.no_persist,
            timeout: cli.timeout.filter(|secs| *secs > 0).map(Duration::from_secs),
            transcript: cli.transcript,
            verbose: cli.verbose,
        }
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: self.timeout,
            verbose: self.verbose,
        }
    }
}

/// Pick the backend base URL; blank values count as unset.
pub fn resolve_api_base_url(cli_value: Option<&str>) -> String {
    cli_value
        .map(str::to_string)
        .filter(|url| !url.trim().is_empty())
        .or_else(|| env::var(LEGACY_BASE_URL_ENV).ok())
        .filter(|url| !url.trim().is_empty())
        .map(|url| normalize_base_url(&url))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

fn resolve_data_dir() -> PathBuf {
    match minichat_logging::default_data_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("{}; keeping data in ./.minichat", e);
            PathBuf::from(".minichat")
        }
    }
}
