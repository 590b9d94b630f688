//! Database layer - store handle and repositories
//!
//! # Design Principles
//!
//! - One connection per operation, opened and closed by the repository method
//! - No pool, no shared mutable state; SQLite serializes writers at the file level
//! - Writes commit before the method returns (autocommit statements)

pub mod repos;
pub mod store;

pub use repos::*;
pub use store::{Initialized, SchemaSource, Store};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
