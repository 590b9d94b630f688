//! Reference table endpoints (read-only)

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{Map, Value};

use crate::db::{ReferenceRepo, ReferenceTable};
use crate::http::error::ApiError;
use crate::http::server::AppState;

type Rows = Json<Vec<Map<String, Value>>>;

/// GET /api/companies
async fn list_companies(State(state): State<Arc<AppState>>) -> Result<Rows, ApiError> {
    let rows = ReferenceRepo::new(&state.store)
        .list(ReferenceTable::Companies)
        .await?;
    Ok(Json(rows))
}

/// GET /api/warehouses
async fn list_warehouses(State(state): State<Arc<AppState>>) -> Result<Rows, ApiError> {
    let rows = ReferenceRepo::new(&state.store)
        .list(ReferenceTable::Warehouses)
        .await?;
    Ok(Json(rows))
}

/// Reference routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/companies", get(list_companies))
        .route("/api/warehouses", get(list_warehouses))
}
