//! Feed CLI - drives a local session persisted to a JSON file.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use feed_infra::FileStorage;
use feed_session::Session;

mod cli;
mod commands;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so command output stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let storage = FileStorage::open(&cli.storage).await?;
    tracing::debug!(path = %storage.path().display(), "Using session storage");
    let session = Session::open(Arc::new(storage)).await;

    let mut out = std::io::stdout().lock();
    commands::run(&session, cli.command, &mut out).await
}
