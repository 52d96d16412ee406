//! epf-desk - EPF customer request tracker
//!
//! Terminal client for the EPF backend: lists pending and completed
//! requests and runs the confirmation, reopen, delete and add actions.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use epf_desk_console::{run, Cli};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "epf_desk=info";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    run(cli).await
}
