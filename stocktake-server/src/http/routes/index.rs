//! API metadata served at `/` and `/api`

use std::collections::BTreeMap;

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Endpoint listing returned by the index routes
#[derive(Serialize)]
pub struct ApiInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub database: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

pub const API_NAME: &str = "Stock Take SQL Server";

const ENDPOINTS: [(&str, &str); 7] = [
    ("GET /api/items", "Get all stock items"),
    ("GET /api/items/{id}", "Get item by ID"),
    ("POST /api/items", "Create new item"),
    ("PUT /api/items/{id}", "Update item"),
    ("DELETE /api/items/{id}", "Delete item"),
    ("GET /api/companies", "Get all companies"),
    ("GET /api/warehouses", "Get all warehouses"),
];

/// GET / and GET /api
async fn index() -> Json<ApiInfo> {
    Json(ApiInfo {
        name: API_NAME,
        version: env!("CARGO_PKG_VERSION"),
        database: "SQLite",
        endpoints: ENDPOINTS.into_iter().collect(),
    })
}

/// Index routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/api", get(index))
}
