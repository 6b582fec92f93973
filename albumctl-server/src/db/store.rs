//! Storage seam between the HTTP layer and a concrete backend

use async_trait::async_trait;

use albumctl_core::{Album, Pagination};

use super::DbError;

/// Album storage operations.
///
/// Implemented by [`AlbumRepo`](super::AlbumRepo) for PostgreSQL and by
/// [`MemoryAlbumStore`](super::MemoryAlbumStore). Both order albums by id.
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// All albums, ordered by id.
    async fn list(&self) -> Result<Vec<Album>, DbError>;

    /// One page of albums; empty when the offset is past the end.
    async fn list_page(&self, page: Pagination) -> Result<Vec<Album>, DbError>;

    /// Album with the given id, or `DbError::NotFound`.
    async fn get(&self, id: &str) -> Result<Album, DbError>;

    /// Insert a new album and return its id.
    ///
    /// A duplicate id yields `DbError::Conflict`.
    async fn insert(&self, album: &Album) -> Result<String, DbError>;

    /// Overwrite title/artist/price of `id`; returns rows affected.
    ///
    /// Zero rows affected yields `DbError::NotFound`.
    async fn update(&self, id: &str, album: &Album) -> Result<u64, DbError>;

    /// Remove `id`; returns rows affected.
    ///
    /// Zero rows affected yields `DbError::NotFound`.
    async fn delete(&self, id: &str) -> Result<u64, DbError>;

    /// Check the backend is reachable.
    async fn ping(&self) -> Result<(), DbError>;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}
