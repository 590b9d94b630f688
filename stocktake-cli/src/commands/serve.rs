//! HTTP server command
//!
//! Creates the database on first start, then serves the stock take API.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use stocktake_server::{run_server, Initialized};

use super::StoreArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 0.0.0.0:5000)
    #[arg(long, short = 'b', env = "STOCKTAKE_BIND")]
    pub bind: Option<SocketAddr>,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let (config, store) = args.store.resolve()?;

    let outcome = store
        .initialize()
        .await
        .with_context(|| format!("Failed to initialize database {}", store.path().display()))?;
    if outcome == Initialized::Created {
        tracing::info!(path = %store.path().display(), "database created from schema");
    }

    let server_config = config.server(args.bind);
    tracing::info!("Starting stocktake server on {}", server_config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(store, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
