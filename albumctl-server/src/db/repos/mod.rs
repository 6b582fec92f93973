//! Repository implementations for database access

pub mod albums;

pub use albums::AlbumRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {resource} '{id}' already exists")]
    Conflict { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn album_not_found(id: &str) -> Self {
        Self::NotFound {
            resource: "album",
            id: id.to_owned(),
        }
    }

    pub(crate) fn album_conflict(id: &str) -> Self {
        Self::Conflict {
            resource: "album",
            id: id.to_owned(),
        }
    }
}
