//! Stock item repository
//!
//! CRUD over `stock_items`:
//! - list: optional substring search, exact location, limit
//! - update: read, apply patch, write, re-read on one connection
//! - delete: idempotent

use chrono::Utc;
use sqlx::sqlite::SqliteConnection;
use sqlx::{Connection, QueryBuilder, Sqlite};
use tracing::debug;

use crate::db::{DbError, Store};
use crate::models::{ItemFilter, NewStockItem, StockItem, StockItemPatch};

const COLUMNS: &str =
    "id, item_name, quantity, location, date, notes, created_at, updated_at";

/// Same layout as SQLite's `CURRENT_TIMESTAMP`, with microseconds so a
/// refresh within the same second still sorts later.
const UPDATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Stock item repository
pub struct ItemRepo<'a> {
    store: &'a Store,
}

impl<'a> ItemRepo<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List items, newest `date` first, then newest `created_at`, then insertion order.
    pub async fn list(&self, filter: &ItemFilter) -> Result<Vec<StockItem>, DbError> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM stock_items WHERE 1=1"));

        if let Some(search) = filter.search.as_deref() {
            // instr() is case-sensitive and treats % and _ literally
            builder
                .push(" AND (instr(item_name, ")
                .push_bind(search)
                .push(") > 0 OR instr(notes, ")
                .push_bind(search)
                .push(") > 0)");
        }

        if let Some(location) = filter.location.as_deref() {
            builder.push(" AND location = ").push_bind(location);
        }

        builder.push(" ORDER BY date DESC, created_at DESC, id ASC");

        if let Some(limit) = filter.limit {
            builder.push(" LIMIT ").push_bind(limit);
        }

        let mut conn = self.store.connect().await?;
        let items = builder
            .build_query_as::<StockItem>()
            .fetch_all(&mut conn)
            .await?;
        conn.close().await?;

        debug!(count = items.len(), ?filter, "listed items");
        Ok(items)
    }

    /// Get a single item by id.
    pub async fn get(&self, id: i64) -> Result<StockItem, DbError> {
        let mut conn = self.store.connect().await?;
        let item = fetch(&mut conn, id).await?;
        conn.close().await?;

        item.ok_or_else(|| not_found(id))
    }

    /// Insert an item and return it as stored.
    pub async fn create(&self, item: NewStockItem) -> Result<StockItem, DbError> {
        let mut conn = self.store.connect().await?;

        let id = sqlx::query(
            r#"
            INSERT INTO stock_items (item_name, quantity, location, date, notes)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&item.item_name)
        .bind(item.quantity_or_default())
        .bind(&item.location)
        .bind(&item.date)
        .bind(&item.notes)
        .execute(&mut conn)
        .await?
        .last_insert_rowid();

        let created = fetch(&mut conn, id).await?;
        conn.close().await?;

        debug!(id, "created item");
        created.ok_or_else(|| not_found(id))
    }

    /// Apply `patch` to an existing item and refresh `updated_at`.
    pub async fn update(&self, id: i64, patch: StockItemPatch) -> Result<StockItem, DbError> {
        let mut conn = self.store.connect().await?;

        let Some(existing) = fetch(&mut conn, id).await? else {
            return Err(not_found(id));
        };
        let merged = patch.apply(existing);
        let updated_at = Utc::now().format(UPDATED_AT_FORMAT).to_string();

        sqlx::query(
            r#"
            UPDATE stock_items
            SET item_name = ?, quantity = ?, location = ?, date = ?, notes = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&merged.item_name)
        .bind(merged.quantity)
        .bind(&merged.location)
        .bind(&merged.date)
        .bind(&merged.notes)
        .bind(&updated_at)
        .bind(id)
        .execute(&mut conn)
        .await?;

        let updated = fetch(&mut conn, id).await?;
        conn.close().await?;

        debug!(id, "updated item");
        updated.ok_or_else(|| not_found(id))
    }

    /// Delete an item. Deleting a missing id is not an error.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let mut conn = self.store.connect().await?;
        let removed = sqlx::query("DELETE FROM stock_items WHERE id = ?")
            .bind(id)
            .execute(&mut conn)
            .await?
            .rows_affected();
        conn.close().await?;

        debug!(id, removed, "deleted item");
        Ok(())
    }
}

async fn fetch(conn: &mut SqliteConnection, id: i64) -> Result<Option<StockItem>, DbError> {
    let item = sqlx::query_as::<_, StockItem>(&format!(
        "SELECT {COLUMNS} FROM stock_items WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(conn)
    .await?;
    Ok(item)
}

fn not_found(id: i64) -> DbError {
    DbError::NotFound {
        resource: "item",
        id: id.to_string(),
    }
}
