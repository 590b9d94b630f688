//! Create the database without starting the server

use anyhow::{Context, Result};
use clap::Parser;
use stocktake_server::Initialized;

use super::StoreArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let (_, store) = args.store.resolve()?;
    let path = store.path().display().to_string();

    let outcome = store
        .initialize()
        .await
        .with_context(|| format!("Failed to initialize database {path}"))?;

    match outcome {
        Initialized::Created => println!("Created database at {path}"),
        Initialized::Existing => println!("Database already exists at {path}; left unchanged"),
    }

    Ok(())
}
