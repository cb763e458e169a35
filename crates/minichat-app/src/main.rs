use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;

use minichat::{
    build_session, run_health_mode, run_history_mode, run_repl_mode, run_send_mode, Cli,
    ClientConfig, Commands,
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "info" } else { "warn" }),
    )
    .init();

    if let Some(shell) = cli.generate {
        clap_complete::generate(shell, &mut Cli::command(), "minichat", &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let config = ClientConfig::from_cli(&cli);
    let session = build_session(&config).await?;

    let ok = match &cli.command {
        None => {
            run_repl_mode(&config, session).await?;
            true
        }
        Some(Commands::Send { text }) => run_send_mode(&session, text).await?,
        Some(Commands::History) => {
            run_history_mode(&session)?;
            true
        }
        Some(Commands::Health) => run_health_mode(&session).await?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
