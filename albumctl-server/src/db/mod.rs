//! Database layer - connection pool, album storage and migrations
//!
//! # Design Principles
//!
//! - One statement per operation, no cross-call state
//! - Rely on the primary key for uniqueness, no check-then-insert
//! - Zero affected rows on update/delete is reported as NotFound

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod seed;
pub mod store;

pub use memory::MemoryAlbumStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::{AlbumRepo, DbError};
pub use store::AlbumStore;
