//! In-memory album store
//!
//! Same contract as the PostgreSQL repository, backed by an ordered map.
//! Used by tests and by `serve --backend memory`.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use albumctl_core::{Album, Pagination};

use super::store::AlbumStore;
use super::DbError;

#[derive(Debug, Default)]
pub struct MemoryAlbumStore {
    albums: RwLock<BTreeMap<String, Album>>,
}

impl MemoryAlbumStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `albums`; later duplicates replace earlier ones.
    pub fn with_albums(albums: impl IntoIterator<Item = Album>) -> Self {
        let map = albums
            .into_iter()
            .map(|album| (album.id.clone(), album))
            .collect();
        Self {
            albums: RwLock::new(map),
        }
    }

    pub async fn len(&self) -> usize {
        self.albums.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.albums.read().await.is_empty()
    }
}

#[async_trait]
impl AlbumStore for MemoryAlbumStore {
    async fn list(&self) -> Result<Vec<Album>, DbError> {
        Ok(self.albums.read().await.values().cloned().collect())
    }

    async fn list_page(&self, page: Pagination) -> Result<Vec<Album>, DbError> {
        let albums = self.albums.read().await;
        let skip = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        Ok(albums
            .values()
            .skip(skip)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn get(&self, id: &str) -> Result<Album, DbError> {
        self.albums
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| DbError::album_not_found(id))
    }

    async fn insert(&self, album: &Album) -> Result<String, DbError> {
        match self.albums.write().await.entry(album.id.clone()) {
            Entry::Occupied(_) => Err(DbError::album_conflict(&album.id)),
            Entry::Vacant(slot) => {
                slot.insert(album.clone());
                Ok(album.id.clone())
            }
        }
    }

    async fn update(&self, id: &str, album: &Album) -> Result<u64, DbError> {
        let mut albums = self.albums.write().await;
        let existing = albums
            .get_mut(id)
            .ok_or_else(|| DbError::album_not_found(id))?;
        existing.overwrite_with(album);
        Ok(1)
    }

    async fn delete(&self, id: &str) -> Result<u64, DbError> {
        self.albums
            .write()
            .await
            .remove(id)
            .map(|_| 1)
            .ok_or_else(|| DbError::album_not_found(id))
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
