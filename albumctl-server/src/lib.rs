//! albumctl-server: album CRUD over HTTP
//!
//! - [`db`]: storage layer (PostgreSQL repository, in-memory store, migrations)
//! - [`http`]: axum router, handlers and error mapping

pub mod db;
pub mod http;

pub use db::{AlbumStore, DbError};
pub use http::{build_router, run_server, AppState, ServerConfig};
