//! Album repository
//!
//! Handles album CRUD with these patterns:
//! - insert: relies on the primary key, duplicate ids surface as Conflict
//! - update/delete: zero affected rows surface as NotFound
//! - list/list_page: byte-wise id order (`COLLATE "C"`), LIMIT/OFFSET in SQL

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use albumctl_core::{Album, Pagination};

use super::DbError;
use crate::db::store::AlbumStore;

/// Album row as read from the database
#[derive(Debug, Clone, FromRow)]
struct AlbumRow {
    id: String,
    title: String,
    artist: String,
    price: f64,
}

impl From<AlbumRow> for Album {
    fn from(row: AlbumRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            artist: row.artist,
            price: row.price,
        }
    }
}

/// PostgreSQL album repository
#[derive(Debug, Clone)]
pub struct AlbumRepo {
    pool: PgPool,
}

impl AlbumRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Map a unique-violation on insert to Conflict, everything else to Sqlx.
fn map_insert_error(err: sqlx::Error, id: &str) -> DbError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => DbError::album_conflict(id),
        _ => DbError::Sqlx(err),
    }
}

#[async_trait]
impl AlbumStore for AlbumRepo {
    async fn list(&self) -> Result<Vec<Album>, DbError> {
        let rows: Vec<AlbumRow> = sqlx::query_as(
            r#"
            SELECT id, title, artist, price
            FROM albums
            ORDER BY id COLLATE "C"
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Album::from).collect())
    }

    async fn list_page(&self, page: Pagination) -> Result<Vec<Album>, DbError> {
        let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);

        let rows: Vec<AlbumRow> = sqlx::query_as(
            r#"
            SELECT id, title, artist, price
            FROM albums
            ORDER BY id COLLATE "C"
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(page.limit()))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Album::from).collect())
    }

    async fn get(&self, id: &str) -> Result<Album, DbError> {
        let row: AlbumRow = sqlx::query_as(
            r#"
            SELECT id, title, artist, price
            FROM albums
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::album_not_found(id))?;

        Ok(row.into())
    }

    async fn insert(&self, album: &Album) -> Result<String, DbError> {
        let (id,): (String,) = sqlx::query_as(
            r#"
            INSERT INTO albums (id, title, artist, price)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&album.id)
        .bind(&album.title)
        .bind(&album.artist)
        .bind(album.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, &album.id))?;

        tracing::debug!(album_id = %id, "album inserted");
        Ok(id)
    }

    async fn update(&self, id: &str, album: &Album) -> Result<u64, DbError> {
        let affected = sqlx::query(
            r#"
            UPDATE albums
            SET title = $1, artist = $2, price = $3
            WHERE id = $4
            "#,
        )
        .bind(&album.title)
        .bind(&album.artist)
        .bind(album.price)
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(DbError::album_not_found(id));
        }
        Ok(affected)
    }

    async fn delete(&self, id: &str) -> Result<u64, DbError> {
        let affected = sqlx::query("DELETE FROM albums WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if affected == 0 {
            return Err(DbError::album_not_found(id));
        }
        Ok(affected)
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p albumctl-server -- --ignored
    //
    // Each test works on its own id prefix so they can share one database.

    async fn repo() -> AlbumRepo {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        AlbumRepo::new(pool)
    }

    async fn cleanup(repo: &AlbumRepo, prefix: &str) {
        sqlx::query("DELETE FROM albums WHERE id LIKE $1")
            .bind(format!("{prefix}%"))
            .execute(repo.pool())
            .await
            .expect("cleanup failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_get_roundtrips() {
        let repo = repo().await;
        cleanup(&repo, "rt-").await;

        let album = Album::new("rt-1", "Blue Train", "John Coltrane", 56.99);
        let id = repo.insert(&album).await.expect("insert failed");
        assert_eq!(id, "rt-1");

        let fetched = repo.get("rt-1").await.expect("get failed");
        assert_eq!(fetched, album);

        cleanup(&repo, "rt-").await;
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_insert_is_conflict() {
        let repo = repo().await;
        cleanup(&repo, "dup-").await;

        let album = Album::new("dup-1", "Jeru", "Gerry Mulligan", 17.99);
        repo.insert(&album).await.expect("first insert failed");
        let err = repo.insert(&album).await.unwrap_err();
        assert!(matches!(err, DbError::Conflict { .. }), "got {err:?}");

        cleanup(&repo, "dup-").await;
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_and_delete_missing_are_not_found() {
        let repo = repo().await;
        let album = Album::new("missing-1", "", "", 0.0);

        let err = repo.update("missing-1", &album).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));

        let err = repo.delete("missing-1").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_overwrites_fields() {
        let repo = repo().await;
        cleanup(&repo, "upd-").await;

        repo.insert(&Album::new("upd-1", "Jeru", "Gerry Mulligan", 17.99))
            .await
            .expect("insert failed");
        let affected = repo
            .update("upd-1", &Album::new("ignored", "Jeru", "Gerry Mulligan", 19.99))
            .await
            .expect("update failed");
        assert_eq!(affected, 1);

        let fetched = repo.get("upd-1").await.expect("get failed");
        assert_eq!(fetched.id, "upd-1");
        assert_eq!(fetched.price, 19.99);

        cleanup(&repo, "upd-").await;
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn prices_roundtrip_exactly() {
        let repo = repo().await;
        cleanup(&repo, "price-").await;

        for (id, price) in [("price-1", 49.999), ("price-2", 0.125), ("price-3", 123456789.0)] {
            let album = Album::new(id, "Title", "Artist", price);
            repo.insert(&album).await.expect("insert failed");
            assert_eq!(repo.get(id).await.expect("get failed").price, price);
        }

        repo.update("price-1", &Album::new("price-1", "Title", "Artist", 1e12 + 0.5))
            .await
            .expect("update failed");
        assert_eq!(repo.get("price-1").await.expect("get failed").price, 1e12 + 0.5);

        cleanup(&repo, "price-").await;
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_orders_ids_bytewise() {
        let repo = repo().await;
        cleanup(&repo, "ord-").await;

        // Locale collations ignore case and punctuation; byte order does not.
        for id in ["ord-b", "ord-B", "ord-a", "ord-_"] {
            repo.insert(&Album::new(id, "", "", 0.0)).await.expect("insert failed");
        }

        let ids: Vec<String> = repo
            .list()
            .await
            .expect("list failed")
            .into_iter()
            .map(|a| a.id)
            .filter(|id| id.starts_with("ord-"))
            .collect();
        assert_eq!(ids, ["ord-B", "ord-_", "ord-a", "ord-b"]);

        let mut expected = ids.clone();
        expected.sort();
        assert_eq!(ids, expected);

        cleanup(&repo, "ord-").await;
    }
}
