//! Namecraft command-line entry point.

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use namecraft::cli::{execute, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    execute(cli).await
}
