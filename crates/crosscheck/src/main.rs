//! Command-line entry point for the cross-platform discrepancy engine.

use anyhow::Context;
use clap::{Parser, Subcommand};
use crosscheck_config::CrosscheckConfig;
use crosscheck_core::Engine;
use log::info;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Command-line options.
#[derive(Parser)]
#[command(name = "crosscheck", version, about = "Cross-platform GRC discrepancy engine")]
struct Cli {
    /// Optional path to a crosscheck.json5 config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve,
    /// Poll every platform and print the collection summary
    Monitor,
    /// Run the rule engine and print the findings
    Validate,
    /// Print the full intelligence report
    Report,
    /// Print the recent activity feed
    Feed,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<CrosscheckConfig> {
    match path {
        Some(path) => CrosscheckConfig::load_from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(CrosscheckConfig::default()),
    }
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render report")?;
    println!("{rendered}");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder().format_timestamp_millis().try_init();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let engine = Arc::new(Engine::with_default_adapters(&config));

    match cli.command {
        Command::Serve => {
            info!(
                "starting server (host={}, port={})",
                config.server.host, config.server.port
            );
            crosscheck_server::serve(&config.server, engine)
                .await
                .context("server terminated")?;
        }
        Command::Monitor => print_json(&engine.monitor().await)?,
        Command::Validate => print_json(&engine.validate().await)?,
        Command::Report => print_json(&engine.intelligence_report().await)?,
        Command::Feed => print_json(&engine.activity_feed().await)?,
    }
    Ok(())
}
