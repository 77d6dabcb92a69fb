use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{debug, info, instrument, warn};

use crate::{auth::extractors::AuthUser, error::ApiError, state::AppState};

use super::{
    dto::{ArtworkBody, DeleteArtworkResponse, UpdateArtworkResponse},
    repo_types::Artwork,
};

pub fn artwork_routes() -> Router<AppState> {
    Router::new()
        .route("/artworks", get(list_artworks).post(create_artwork))
        .route(
            "/artworks/:id",
            get(get_artwork).put(update_artwork).delete(delete_artwork),
        )
}

#[instrument(skip(state, payload))]
pub async fn create_artwork(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<ArtworkBody>,
) -> Result<(StatusCode, Json<Artwork>), ApiError> {
    let artwork = Artwork::create(&state.db, user_id, &payload).await?;
    info!(user_id, artwork_id = artwork.id, "artwork created");
    Ok((StatusCode::CREATED, Json(artwork)))
}

#[instrument(skip(state))]
pub async fn list_artworks(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Artwork>>, ApiError> {
    let artworks = Artwork::list_by_user(&state.db, user_id).await?;
    debug!(user_id, count = artworks.len(), "artworks listed");
    Ok(Json(artworks))
}

#[instrument(skip(state))]
pub async fn get_artwork(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Artwork>, ApiError> {
    // Not-found for both "absent" and "owned by someone else", so existence
    // of other users' rows is never leaked.
    let artwork = Artwork::get_by_id(&state.db, user_id, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Artwork not found".into()))?;
    Ok(Json(artwork))
}

#[instrument(skip(state, payload))]
pub async fn update_artwork(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<ArtworkBody>,
) -> Result<Json<UpdateArtworkResponse>, ApiError> {
    let artwork = match Artwork::update(&state.db, user_id, id, &payload).await? {
        Some(a) => a,
        None => {
            warn!(user_id, artwork_id = id, "update matched no row");
            return Err(ApiError::NotFound("Artwork not found or unauthorized".into()));
        }
    };

    info!(user_id, artwork_id = id, "artwork updated");
    Ok(Json(UpdateArtworkResponse {
        message: "Artwork updated".into(),
        artwork,
    }))
}

#[instrument(skip(state))]
pub async fn delete_artwork(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<DeleteArtworkResponse>, ApiError> {
    // Deliberately reports success even when nothing matched.
    let deleted = Artwork::delete(&state.db, user_id, id).await?;
    info!(user_id, artwork_id = id, deleted, "artwork delete");
    Ok(Json(DeleteArtworkResponse {
        message: "Artwork deleted".into(),
    }))
}
