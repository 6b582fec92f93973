//! Album endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use albumctl_core::{Album, Pagination, PaginationParams};

use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;

/// Plain `{"message": ...}` response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /albums - one page of albums (`?page=1&pageSize=10`)
///
/// Unparseable query strings fall back to the default page.
async fn list_albums(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<Vec<Album>>, ApiError> {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::debug!("Ignoring bad pagination query: {}", rejection.body_text());
            PaginationParams::default()
        }
    };
    let page = Pagination::from(params);

    let albums = state.store.list_page(page).await?;
    Ok(Json(albums))
}

/// POST /albums - create an album, echoing it back
async fn create_album(
    State(state): State<Arc<AppState>>,
    ValidJson(album): ValidJson<Album>,
) -> Result<(StatusCode, Json<Album>), ApiError> {
    let id = state.store.insert(&album).await?;
    tracing::info!(album_id = %id, "album created");

    Ok((StatusCode::CREATED, Json(album)))
}

/// GET /albums/{id} - get a single album
async fn get_album(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Album>, ApiError> {
    let album = state.store.get(&id).await?;
    Ok(Json(album))
}

/// PUT /albums/{id} - replace title/artist/price, echoing the submitted album
async fn update_album(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidJson(album): ValidJson<Album>,
) -> Result<Json<Album>, ApiError> {
    state.store.update(&id, &album).await?;
    tracing::info!(album_id = %id, "album updated");

    Ok(Json(album))
}

/// DELETE /albums/{id}
async fn delete_album(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete(&id).await?;
    tracing::info!(album_id = %id, "album deleted");

    Ok(Json(MessageResponse {
        message: "album deleted",
    }))
}

/// Album routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/albums", get(list_albums).post(create_album))
        .route(
            "/albums/{id}",
            get(get_album).put(update_album).delete(delete_album),
        )
}
