//! Configuration file for the stocktake CLI
//!
//! Lookup order for the file: `--config` / `STOCKTAKE_CONFIG`, then
//! `~/.stocktake/config.toml`. Values from the file sit below flags and
//! environment variables and above the built-in defaults.
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:5000"
//!
//! [database]
//! path = "stocktake.db"
//! schema = "setup.sql"
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use stocktake_server::{SchemaSource, ServerConfig, Store};

/// Database file used when nothing else names one
pub const DEFAULT_DB_PATH: &str = "stocktake.db";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StocktakeConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub path: Option<PathBuf>,
    /// External schema used when creating the database; bundled schema if unset
    pub schema: Option<PathBuf>,
}

impl StocktakeConfig {
    /// Load the config file.
    ///
    /// An explicitly named file must exist; the default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Default config path: ~/.stocktake/config.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".stocktake").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid TOML")
    }

    /// Build the store handle; `db` and `schema` come from flags or environment.
    pub fn store(&self, db: Option<PathBuf>, schema: Option<PathBuf>) -> Store {
        let path = db
            .or_else(|| self.database.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        let schema = match schema.or_else(|| self.database.schema.clone()) {
            Some(file) => SchemaSource::File(file),
            None => SchemaSource::Bundled,
        };

        Store::new(path, schema)
    }

    pub fn server(&self, bind: Option<SocketAddr>) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            bind_addr: bind.or(self.server.bind).unwrap_or(defaults.bind_addr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_file_uses_defaults() {
        let config = StocktakeConfig::parse("").unwrap();
        assert_eq!(config, StocktakeConfig::default());

        let store = config.store(None, None);
        assert_eq!(store.path(), Path::new(DEFAULT_DB_PATH));
        assert_eq!(config.server(None).bind_addr.port(), 5000);
    }

    #[test]
    fn file_values_fill_in_missing_flags() {
        let config = StocktakeConfig::parse(
            r#"
            [server]
            bind = "127.0.0.1:8080"

            [database]
            path = "/var/lib/stocktake/items.db"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.server(None).bind_addr,
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(
            config.store(None, None).path(),
            Path::new("/var/lib/stocktake/items.db")
        );
    }

    #[test]
    fn flags_override_file() {
        let config = StocktakeConfig::parse(
            r#"
            [server]
            bind = "127.0.0.1:8080"

            [database]
            path = "from-file.db"
            "#,
        )
        .unwrap();

        let bind: SocketAddr = "127.0.0.1:9000".parse().unwrap();
        assert_eq!(config.server(Some(bind)).bind_addr, bind);
        assert_eq!(
            config.store(Some("flag.db".into()), None).path(),
            Path::new("flag.db")
        );
    }

    #[test]
    fn invalid_bind_is_rejected() {
        let err = StocktakeConfig::parse("[server]\nbind = \"not an address\"").unwrap_err();
        assert!(err.to_string().contains("invalid TOML"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(StocktakeConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn explicit_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[database]\nschema = \"custom.sql\"\n").unwrap();

        let config = StocktakeConfig::load(Some(&path)).unwrap();
        assert_eq!(config.database.schema, Some(PathBuf::from("custom.sql")));
    }
}
