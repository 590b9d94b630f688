//! Command implementations for the stocktake CLI

use std::path::PathBuf;

use clap::Args;
use stocktake_server::Store;

use crate::config::StocktakeConfig;

pub mod init_db;
pub mod serve;

pub use init_db::run_init_db;
pub use serve::run_serve;

/// Options shared by every command that touches the database
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// SQLite database file (created on first start if absent)
    #[arg(long, env = "STOCKTAKE_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Schema script used when creating the database (default: bundled schema)
    #[arg(long, env = "STOCKTAKE_SCHEMA", value_name = "PATH")]
    pub schema: Option<PathBuf>,

    /// Config file (default: ~/.stocktake/config.toml if present)
    #[arg(long, env = "STOCKTAKE_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl StoreArgs {
    /// Load the config file and resolve the store handle.
    pub fn resolve(&self) -> anyhow::Result<(StocktakeConfig, Store)> {
        let config = StocktakeConfig::load(self.config.as_deref())?;
        let store = config.store(self.db.clone(), self.schema.clone());
        Ok((config, store))
    }
}
