//! Canonical sample albums

use albumctl_core::Album;

use super::{AlbumStore, DbError};

/// The three albums every fresh install starts with.
pub fn sample_albums() -> Vec<Album> {
    vec![
        Album::new("1", "Blue Train", "John Coltrane", 56.99),
        Album::new("2", "Jeru", "Gerry Mulligan", 17.99),
        Album::new(
            "3",
            "Sarah Vaughan and Clifford Brown",
            "Sarah Vaughan",
            39.99,
        ),
    ]
}

/// Outcome of a seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    /// Already present; left untouched
    pub skipped: usize,
    pub failed: usize,
}

/// Insert the sample albums.
///
/// Existing ids are skipped and other failures are logged; neither aborts
/// the run.
pub async fn seed_albums(store: &dyn AlbumStore) -> SeedReport {
    let mut report = SeedReport::default();

    for album in sample_albums() {
        match store.insert(&album).await {
            Ok(id) => {
                tracing::info!(album_id = %id, title = %album.title, "seeded album");
                report.inserted += 1;
            }
            Err(DbError::Conflict { .. }) => {
                tracing::debug!(album_id = %album.id, "album already present, skipping");
                report.skipped += 1;
            }
            Err(e) => {
                tracing::warn!(album_id = %album.id, error = %e, "failed to seed album");
                report.failed += 1;
            }
        }
    }

    report
}
