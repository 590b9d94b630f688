//! Custom Axum extractors
//!
//! Rejections are mapped onto [`ApiError`] so every failure answers with
//! the same JSON error shape.

use axum::extract::{FromRequest, FromRequestParts, Json, Path, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::ApiError;

/// JSON request body. Malformed JSON is an internal error.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::internal(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Integer item id from the path. Anything else does not name an item.
pub struct ItemId(pub i64);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i64> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NoRoute)?;
        Ok(Self(id))
    }
}

/// Query string where a repeated key keeps its first value.
///
/// Values arrive as strings; anything that still fails to deserialize is an
/// internal error rather than a plain-text 400.
pub struct ListQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ListQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs): Query<Vec<(String, String)>> = Query::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::internal(rejection.body_text()))?;

        let mut first = Map::new();
        for (key, value) in pairs {
            first.entry(key).or_insert(Value::String(value));
        }

        let value = serde_json::from_value(Value::Object(first))
            .map_err(|e| ApiError::internal(e.to_string()))?;
        Ok(Self(value))
    }
}
