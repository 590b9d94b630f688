//! Store handle for the embedded SQLite database
//!
//! The store is an explicitly passed handle: it knows the database file and
//! the schema used to create it, and hands out a fresh connection per call.

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, info};

use super::DbError;

/// Default schema compiled into the binary.
const BUNDLED_SCHEMA: &str = include_str!("../../schema/setup.sql");

/// Where the schema script comes from when the database is first created.
#[derive(Debug, Clone, Default)]
pub enum SchemaSource {
    /// `schema/setup.sql` shipped with this crate
    #[default]
    Bundled,
    /// External `.sql` file read at initialization time
    File(PathBuf),
}

impl SchemaSource {
    async fn load(&self) -> Result<String, DbError> {
        match self {
            Self::Bundled => Ok(BUNDLED_SCHEMA.to_owned()),
            Self::File(path) => Ok(tokio::fs::read_to_string(path).await?),
        }
    }
}

/// Outcome of [`Store::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initialized {
    /// Database file was absent and has been created from the schema
    Created,
    /// Database file already existed and was left unchanged
    Existing,
}

/// Handle to the database file. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    schema: SchemaSource,
    options: SqliteConnectOptions,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>, schema: SchemaSource) -> Self {
        let path = path.into();
        let options = SqliteConnectOptions::new().filename(&path);
        Self {
            path,
            schema,
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the database from the schema if the file does not exist yet.
    ///
    /// An existing file is reused as-is, whatever tables it holds.
    pub async fn initialize(&self) -> Result<Initialized, DbError> {
        if tokio::fs::try_exists(&self.path).await? {
            debug!(path = %self.path.display(), "reusing existing database");
            return Ok(Initialized::Existing);
        }

        // Read the schema before touching the filesystem so a bad schema
        // path does not leave an empty database behind.
        let schema = self.schema.load().await?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        info!(path = %self.path.display(), "creating database");
        let mut conn = self
            .options
            .clone()
            .create_if_missing(true)
            .connect()
            .await?;
        sqlx::raw_sql(&schema).execute(&mut conn).await?;
        conn.close().await?;

        info!("database initialized");
        Ok(Initialized::Created)
    }

    /// Open a fresh connection for a single operation.
    ///
    /// Callers close it when done; dropping it also closes it.
    pub async fn connect(&self) -> Result<SqliteConnection, DbError> {
        Ok(self.options.connect().await?)
    }

    /// Open and close a connection to confirm the database file is usable.
    pub async fn ping(&self) -> Result<(), DbError> {
        let mut conn = self.connect().await?;
        conn.ping().await?;
        conn.close().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;
    use tempfile::tempdir;

    async fn table_names(store: &Store) -> Vec<String> {
        let mut conn = store.connect().await.unwrap();
        let rows = sqlx::query("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .fetch_all(&mut conn)
            .await
            .unwrap();
        rows.iter().map(|r| r.get::<String, _>("name")).collect()
    }

    #[tokio::test]
    async fn creates_database_from_bundled_schema() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("stocktake.db"), SchemaSource::Bundled);

        let outcome = store.initialize().await.unwrap();
        assert_eq!(outcome, Initialized::Created);
        assert!(store.path().exists());

        let tables = table_names(&store).await;
        for expected in ["companies", "stock_items", "warehouses"] {
            assert!(tables.iter().any(|t| t == expected), "missing {expected}");
        }
    }

    #[tokio::test]
    async fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let store = Store::new(
            dir.path().join("nested").join("data").join("stocktake.db"),
            SchemaSource::Bundled,
        );

        store.initialize().await.unwrap();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn existing_file_is_left_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stocktake.db");

        let schema_path = dir.path().join("custom.sql");
        std::fs::write(&schema_path, "CREATE TABLE legacy (id INTEGER PRIMARY KEY);").unwrap();
        let first = Store::new(&path, SchemaSource::File(schema_path));
        assert_eq!(first.initialize().await.unwrap(), Initialized::Created);

        let second = Store::new(&path, SchemaSource::Bundled);
        assert_eq!(second.initialize().await.unwrap(), Initialized::Existing);

        assert_eq!(table_names(&second).await, vec!["legacy".to_string()]);
    }

    #[tokio::test]
    async fn ping_requires_an_existing_file() {
        let dir = tempdir().unwrap();
        let store = Store::new(dir.path().join("stocktake.db"), SchemaSource::Bundled);

        assert!(store.ping().await.is_err());
        store.initialize().await.unwrap();
        store.ping().await.unwrap();
    }

    #[tokio::test]
    async fn missing_schema_file_is_an_error() {
        let dir = tempdir().unwrap();
        let store = Store::new(
            dir.path().join("stocktake.db"),
            SchemaSource::File(dir.path().join("nope.sql")),
        );

        let err = store.initialize().await.unwrap_err();
        assert!(matches!(err, DbError::Io(_)));
        assert!(!store.path().exists());
    }
}
