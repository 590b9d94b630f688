//! Stock item endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::ItemRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ItemId, JsonBody, ListQuery};
use crate::http::server::AppState;
use crate::models::{ItemFilter, ItemListParams, NewStockItem, StockItem, StockItemPatch};

/// Body of create/update responses
#[derive(Serialize)]
pub struct ItemResponse {
    pub message: &'static str,
    pub item: StockItem,
}

/// Body of delete responses
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /api/items - list items with optional search, location and limit
async fn list_items(
    State(state): State<Arc<AppState>>,
    ListQuery(params): ListQuery<ItemListParams>,
) -> Result<Json<Vec<StockItem>>, ApiError> {
    let filter = ItemFilter::from(params);
    let items = ItemRepo::new(&state.store).list(&filter).await?;
    Ok(Json(items))
}

/// GET /api/items/{id} - get a single item
async fn get_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> Result<Json<StockItem>, ApiError> {
    let item = ItemRepo::new(&state.store).get(id).await?;
    Ok(Json(item))
}

/// POST /api/items - create an item
async fn create_item(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<NewStockItem>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let item = ItemRepo::new(&state.store).create(body).await?;
    tracing::info!(id = item.id, "item created");

    Ok((
        StatusCode::CREATED,
        Json(ItemResponse {
            message: "Item created successfully",
            item,
        }),
    ))
}

/// PUT /api/items/{id} - update the supplied fields of an item
async fn update_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
    JsonBody(patch): JsonBody<StockItemPatch>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = ItemRepo::new(&state.store).update(id, patch).await?;
    tracing::info!(id, "item updated");

    Ok(Json(ItemResponse {
        message: "Item updated successfully",
        item,
    }))
}

/// DELETE /api/items/{id} - delete an item (idempotent)
async fn delete_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> Result<Json<MessageResponse>, ApiError> {
    ItemRepo::new(&state.store).delete(id).await?;
    tracing::info!(id, "item deleted");

    Ok(Json(MessageResponse {
        message: "Item deleted successfully",
    }))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route(
            "/api/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}
