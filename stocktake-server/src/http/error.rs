//! API error types with IntoResponse
//!
//! Errors are converted to `{"error": "..."}` JSON bodies. Anything other
//! than a missing record is a 500 carrying the underlying message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Route not found (404)
    NoRoute,

    /// Any other failure (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } | Self::NoRoute => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, %id, "not found");
                capitalize(&format!("{resource} not found"))
            }
            Self::NoRoute => "Not found".to_string(),
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                message
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            other => Self::internal(other.to_string()),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let err = ApiError::NotFound {
            resource: "item",
            id: "9".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Item not found");
    }

    #[tokio::test]
    async fn internal_is_500_with_raw_message() {
        let response = ApiError::internal("no such table: stock_items").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "no such table: stock_items");
    }

    #[test]
    fn db_not_found_maps_to_not_found() {
        let err = ApiError::from(DbError::NotFound {
            resource: "item",
            id: "1".into(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn db_failures_map_to_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = ApiError::from(DbError::Io(io));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(err, ApiError::Internal { message } if message == "disk full"));
    }
}
