//! Stock item records and the request shapes that create, patch and filter them

use serde::{Deserialize, Deserializer, Serialize};

/// One row of `stock_items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StockItem {
    pub id: i64,
    pub item_name: String,
    pub quantity: i64,
    pub location: Option<String>,
    /// Caller-supplied, stored verbatim
    pub date: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// POST /api/items body. Missing fields are stored as NULL, except
/// `quantity` which defaults to 0.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewStockItem {
    pub item_name: Option<String>,
    pub quantity: Option<i64>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub notes: Option<String>,
}

impl NewStockItem {
    pub fn quantity_or_default(&self) -> i64 {
        self.quantity.unwrap_or(0)
    }
}

/// PUT /api/items/{id} body.
///
/// `item_name` and `quantity` keep the stored value when absent or null.
/// The nullable columns distinguish absent (keep), `null` (clear) and a
/// value (set).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StockItemPatch {
    pub item_name: Option<String>,
    pub quantity: Option<i64>,
    #[serde(default, deserialize_with = "present")]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub date: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub notes: Option<Option<String>>,
}

impl StockItemPatch {
    /// Apply every supplied field on top of `existing`.
    ///
    /// Timestamps are left alone; the repository refreshes `updated_at`.
    pub fn apply(self, existing: StockItem) -> StockItem {
        StockItem {
            item_name: self.item_name.unwrap_or(existing.item_name),
            quantity: self.quantity.unwrap_or(existing.quantity),
            location: self.location.unwrap_or(existing.location),
            date: self.date.unwrap_or(existing.date),
            notes: self.notes.unwrap_or(existing.notes),
            ..existing
        }
    }
}

/// Marks a field as present so an explicit `null` is kept apart from a
/// missing key (which `#[serde(default)]` turns into `None`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Raw query string of GET /api/items.
///
/// `limit` stays a string so a non-numeric value is ignored instead of
/// rejecting the whole request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemListParams {
    pub search: Option<String>,
    pub location: Option<String>,
    pub limit: Option<String>,
}

/// Normalized list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Case-sensitive substring of `item_name` or `notes`
    pub search: Option<String>,
    /// Exact `location`
    pub location: Option<String>,
    pub limit: Option<i64>,
}

impl From<ItemListParams> for ItemFilter {
    fn from(params: ItemListParams) -> Self {
        Self {
            search: params.search.filter(|s| !s.is_empty()),
            location: params.location.filter(|l| !l.is_empty()),
            limit: params
                .limit
                .and_then(|raw| raw.trim().parse::<i64>().ok())
                .filter(|n| *n != 0),
        }
    }
}
