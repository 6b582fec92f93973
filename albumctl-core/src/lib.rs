//! albumctl-core: domain types shared by the album server and CLI.
//!
//! - [`Album`]: the single managed resource
//! - [`Pagination`]: offset pagination with lenient query parsing
//! - [`AlbumConfig`]: layered TOML/env configuration

pub mod album;
pub mod config;
pub mod pagination;
pub mod validation;

pub use album::Album;
pub use config::{AlbumConfig, DatabaseConfig, ServerSection, StorageBackend};
pub use pagination::{Pagination, PaginationParams, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use validation::ValidationError;
