//! rewind_tictactoe - terminal tic-tac-toe with time-travel

#![warn(missing_docs)]

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use rewind_tictactoe::cli::{Cli, Mode};
use rewind_tictactoe::{HostConfig, Session, run};
use tokio::io::BufReader;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.mode.unwrap_or(Mode::Play) {
        Mode::Play => play(&config).await,
        Mode::Replay { cells } => replay(&config, &cells),
    }
}

/// Config file and environment first, then CLI flags on top.
fn resolve_config(cli: &Cli) -> Result<HostConfig> {
    let mut config = HostConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(ms) = cli.auto_reset_ms {
        config = config.with_auto_reset_delay_ms(ms);
    }
    if let Some(output) = cli.output {
        config = config.with_output(output);
    }
    Ok(config)
}

/// Run the interactive loop on stdin/stdout
#[instrument(skip(config))]
async fn play(config: &HostConfig) -> Result<()> {
    info!(
        auto_reset_delay_ms = config.auto_reset_delay_ms(),
        output = %config.output(),
        "Starting interactive session"
    );

    let mut session = Session::new(config);
    let mut stdout = tokio::io::stdout();
    run(&mut session, BufReader::new(tokio::io::stdin()), &mut stdout)
        .await
        .context("Terminal I/O failed")?;

    info!("Session ended");
    Ok(())
}

/// Apply a move sequence and print the final state
#[instrument(skip(config))]
fn replay(config: &HostConfig, cells: &[usize]) -> Result<()> {
    let mut session = Session::new(config);
    match session.replay(cells) {
        Ok(state) => {
            println!("{}", session.render(&state));
            Ok(())
        }
        Err((n, e)) => {
            println!("{}", session.render(&session.engine().state()));
            Err(anyhow!("move {} (cell {}) rejected: {}", n + 1, cells[n], e))
        }
    }
}
