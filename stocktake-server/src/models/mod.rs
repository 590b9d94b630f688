//! Domain models for the stock take API

pub mod item;

pub use item::{ItemFilter, ItemListParams, NewStockItem, StockItem, StockItemPatch};
