// src/bin/chronolog_ingest.rs

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hotel_chronolog::{
    config::{Config, IngestConfig},
    ingest::{self, IngestMode},
};

/// Parses a log file into ChronoLog's timeline tables.
#[derive(Debug, Parser)]
#[command(name = "chronolog-ingest", version, about)]
struct Cli {
    /// `live` tails the file until Ctrl-C; `batch` stops at end of file.
    #[arg(long, value_enum, default_value = "live")]
    mode: IngestMode,

    /// Log file to read (overrides INPUT_FILE_PATH).
    #[arg(long)]
    input: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let mut ingest_config = IngestConfig::from_env()?;
    if let Some(input) = cli.input {
        ingest_config.input_file = input;
    }

    let pool = config.connect().await?;
    sqlx::migrate!().run(&pool).await?;

    let stats = ingest::run(pool, ingest_config, cli.mode).await?;
    println!(
        "Processed {} lines into {} events ({} message templates)",
        stats.lines_read, stats.events_written, stats.templates_seen
    );

    Ok(())
}
