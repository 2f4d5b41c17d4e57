//! Spana CLI entry point.

use anyhow::Result;
use clap::Parser;
use spana::cli::{commands, Cli, Commands};
use spana::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("spana={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    // Execute command
    match &cli.command {
        Commands::Trends { keyword, timeframe } => {
            commands::run_trends(keyword, timeframe.clone(), settings).await?;
        }

        Commands::Search { query } => {
            commands::run_search(query, settings).await?;
        }

        Commands::Videos { query, limit } => {
            commands::run_videos(query, *limit, settings).await?;
        }

        Commands::Agents {
            json,
            companies,
            positions,
        } => {
            commands::run_agents(*json, companies, positions, settings)?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings)?;
        }
    }

    Ok(())
}
