//! stocktake-server: HTTP API over a SQLite stock take database
//!
//! Exposes CRUD over stock items plus read-only listings of the
//! companies and warehouses reference tables.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, Initialized, SchemaSource, Store};
pub use http::{build_router, run_server, ServerConfig, ServerError};
