//! Read-only reference tables (companies, warehouses)
//!
//! Rows are returned verbatim as JSON objects keyed by column name, so
//! whatever columns the schema defines come through unchanged.

use serde_json::{Map, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Connection, Row, TypeInfo, ValueRef};
use tracing::debug;

use crate::db::{DbError, Store};

/// A reference table exposed for listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceTable {
    Companies,
    Warehouses,
}

impl ReferenceTable {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Companies => "companies",
            Self::Warehouses => "warehouses",
        }
    }
}

/// Reference table repository
pub struct ReferenceRepo<'a> {
    store: &'a Store,
}

impl<'a> ReferenceRepo<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Every row of `table`, in storage order.
    pub async fn list(&self, table: ReferenceTable) -> Result<Vec<Map<String, Value>>, DbError> {
        // Table name comes from the closed enum above, never from the request.
        let sql = format!("SELECT * FROM {}", table.as_str());

        let mut conn = self.store.connect().await?;
        let rows = sqlx::query(&sql).fetch_all(&mut conn).await?;
        conn.close().await?;

        debug!(table = table.as_str(), count = rows.len(), "listed reference rows");
        rows.iter().map(row_to_json).collect()
    }
}

/// Map one row to a JSON object using each value's storage class.
fn row_to_json(row: &SqliteRow) -> Result<Map<String, Value>, DbError> {
    let mut object = Map::new();

    for column in row.columns() {
        let idx = column.ordinal();
        let raw = row.try_get_raw(idx)?;

        let value = if raw.is_null() {
            Value::Null
        } else {
            match raw.type_info().name() {
                "INTEGER" => Value::from(row.try_get::<i64, _>(idx)?),
                "REAL" => Value::from(row.try_get::<f64, _>(idx)?),
                "BLOB" => Value::from(row.try_get::<Vec<u8>, _>(idx)?),
                _ => Value::from(row.try_get::<String, _>(idx)?),
            }
        };

        object.insert(column.name().to_owned(), value);
    }

    Ok(object)
}
