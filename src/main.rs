mod config;
mod error;
mod prober;
mod traits;
mod types;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use prober::HttpProber;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mirror-probe", version)]
#[command(about = "Check that the resilience-layer mirrors are reachable and how fast they answer", long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the probe report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let targets = config::mirror_targets().context("Built-in mirror list is malformed")?;
    let prober = HttpProber::new().context("Failed to build HTTP client")?;

    let mut out = std::io::stdout().lock();
    utils::run_checks(&prober, &targets, &mut out).await?;

    // Mirror failures are reported, not escalated: always exit 0 here
    Ok(())
}
